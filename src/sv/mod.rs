pub mod affiliate;
pub mod attribution;
pub mod checkout;
pub mod commission;
pub mod order;
pub mod product;
#[cfg(test)]
pub mod test_utils;

pub use affiliate::Affiliates;
pub use attribution::Attribution;
pub use checkout::Checkout;
pub use commission::Commissions;
pub use order::Orders;
pub use product::Products;

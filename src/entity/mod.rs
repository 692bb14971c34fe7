pub mod affiliate;
pub mod affiliate_click;
pub mod category;
pub mod commission;
pub mod order;
pub mod order_item;
pub mod product;

pub use affiliate::PaymentMethod;
pub use commission::CommissionStatus;
pub use order::OrderStatus;

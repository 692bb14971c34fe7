use sea_orm_migration::prelude::*;

use super::{
  m20260812_000001_create_catalog::Products,
  m20260812_000002_create_affiliates::Affiliates,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Orders::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Orders::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Orders::OrderId)
              .string_len(20)
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Orders::AffiliateId).integer().null())
          .col(ColumnDef::new(Orders::FullName).string().not_null())
          .col(ColumnDef::new(Orders::Email).string().not_null())
          .col(ColumnDef::new(Orders::Phone).string().not_null())
          .col(ColumnDef::new(Orders::Address).text().not_null())
          .col(ColumnDef::new(Orders::City).string().not_null())
          .col(
            ColumnDef::new(Orders::PostalCode)
              .string()
              .not_null()
              .default(""),
          )
          .col(
            ColumnDef::new(Orders::TotalAmount).decimal_len(10, 2).not_null(),
          )
          .col(
            ColumnDef::new(Orders::Status)
              .string()
              .not_null()
              .default("pending"),
          )
          .col(ColumnDef::new(Orders::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Orders::UpdatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_orders_affiliate")
              .from(Orders::Table, Orders::AffiliateId)
              .to(Affiliates::Table, Affiliates::Id)
              .on_delete(ForeignKeyAction::SetNull),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_orders_order_id")
          .table(Orders::Table)
          .col(Orders::OrderId)
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(OrderItems::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(OrderItems::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
          .col(ColumnDef::new(OrderItems::ProductId).integer().not_null())
          .col(ColumnDef::new(OrderItems::Price).decimal_len(10, 2).not_null())
          .col(
            ColumnDef::new(OrderItems::Quantity)
              .integer()
              .not_null()
              .default(1),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_order_items_order")
              .from(OrderItems::Table, OrderItems::OrderId)
              .to(Orders::Table, Orders::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_order_items_product")
              .from(OrderItems::Table, OrderItems::ProductId)
              .to(Products::Table, Products::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_order_items_order")
          .table(OrderItems::Table)
          .col(OrderItems::OrderId)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(OrderItems::Table).to_owned())
      .await?;

    manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Orders {
  Table,
  Id,
  OrderId,
  AffiliateId,
  FullName,
  Email,
  Phone,
  Address,
  City,
  PostalCode,
  TotalAmount,
  Status,
  CreatedAt,
  UpdatedAt,
}

#[derive(DeriveIden)]
pub enum OrderItems {
  Table,
  Id,
  OrderId,
  ProductId,
  Price,
  Quantity,
}

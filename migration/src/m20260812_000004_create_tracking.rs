use sea_orm_migration::prelude::*;

use super::{
  m20260812_000001_create_catalog::Products,
  m20260812_000002_create_affiliates::Affiliates,
  m20260812_000003_create_orders::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(AffiliateClicks::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(AffiliateClicks::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(AffiliateClicks::AffiliateId).integer().not_null(),
          )
          .col(ColumnDef::new(AffiliateClicks::ProductId).integer().null())
          .col(ColumnDef::new(AffiliateClicks::IpAddress).string().null())
          .col(
            ColumnDef::new(AffiliateClicks::UserAgent)
              .text()
              .not_null()
              .default(""),
          )
          .col(
            ColumnDef::new(AffiliateClicks::Referrer)
              .string_len(500)
              .not_null()
              .default(""),
          )
          .col(
            ColumnDef::new(AffiliateClicks::Converted)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(ColumnDef::new(AffiliateClicks::OrderId).integer().null())
          .col(
            ColumnDef::new(AffiliateClicks::ClickedAt).date_time().not_null(),
          )
          .col(ColumnDef::new(AffiliateClicks::ConvertedAt).date_time().null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_affiliate_clicks_affiliate")
              .from(AffiliateClicks::Table, AffiliateClicks::AffiliateId)
              .to(Affiliates::Table, Affiliates::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_affiliate_clicks_product")
              .from(AffiliateClicks::Table, AffiliateClicks::ProductId)
              .to(Products::Table, Products::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_affiliate_clicks_order")
              .from(AffiliateClicks::Table, AffiliateClicks::OrderId)
              .to(Orders::Table, Orders::Id)
              .on_delete(ForeignKeyAction::SetNull),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_affiliate_clicks_affiliate")
          .table(AffiliateClicks::Table)
          .col(AffiliateClicks::AffiliateId)
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_affiliate_clicks_converted")
          .table(AffiliateClicks::Table)
          .col(AffiliateClicks::Converted)
          .to_owned(),
      )
      .await?;

    manager
      .create_table(
        Table::create()
          .table(Commissions::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Commissions::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Commissions::AffiliateId).integer().not_null())
          .col(
            ColumnDef::new(Commissions::OrderId)
              .integer()
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Commissions::ProductName).string().not_null())
          .col(
            ColumnDef::new(Commissions::ProductPrice)
              .decimal_len(10, 2)
              .not_null(),
          )
          .col(
            ColumnDef::new(Commissions::CommissionRate)
              .decimal_len(5, 2)
              .not_null(),
          )
          .col(
            ColumnDef::new(Commissions::CommissionAmount)
              .decimal_len(10, 2)
              .not_null(),
          )
          .col(
            ColumnDef::new(Commissions::Status)
              .string()
              .not_null()
              .default("pending"),
          )
          .col(ColumnDef::new(Commissions::ApprovedBy).string().null())
          .col(ColumnDef::new(Commissions::ApprovedAt).date_time().null())
          .col(ColumnDef::new(Commissions::PaidAt).date_time().null())
          .col(
            ColumnDef::new(Commissions::AdminNotes)
              .text()
              .not_null()
              .default(""),
          )
          .col(ColumnDef::new(Commissions::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Commissions::UpdatedAt).date_time().not_null())
          .foreign_key(
            ForeignKey::create()
              .name("fk_commissions_affiliate")
              .from(Commissions::Table, Commissions::AffiliateId)
              .to(Affiliates::Table, Affiliates::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .foreign_key(
            ForeignKey::create()
              .name("fk_commissions_order")
              .from(Commissions::Table, Commissions::OrderId)
              .to(Orders::Table, Orders::Id)
              .on_delete(ForeignKeyAction::Cascade),
          )
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_commissions_affiliate_status")
          .table(Commissions::Table)
          .col(Commissions::AffiliateId)
          .col(Commissions::Status)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Commissions::Table).to_owned())
      .await?;

    manager
      .drop_table(Table::drop().table(AffiliateClicks::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum AffiliateClicks {
  Table,
  Id,
  AffiliateId,
  ProductId,
  IpAddress,
  UserAgent,
  Referrer,
  Converted,
  OrderId,
  ClickedAt,
  ConvertedAt,
}

#[derive(DeriveIden)]
pub enum Commissions {
  Table,
  Id,
  AffiliateId,
  OrderId,
  ProductName,
  ProductPrice,
  CommissionRate,
  CommissionAmount,
  Status,
  ApprovedBy,
  ApprovedAt,
  PaidAt,
  AdminNotes,
  CreatedAt,
  UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Affiliates::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Affiliates::Id)
              .integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Affiliates::AffiliateCode)
              .string_len(20)
              .not_null()
              .unique_key(),
          )
          .col(ColumnDef::new(Affiliates::FullName).string().not_null())
          .col(
            ColumnDef::new(Affiliates::Phone).string().not_null().default(""),
          )
          .col(
            ColumnDef::new(Affiliates::PaymentMethod)
              .string()
              .not_null()
              .default("bank"),
          )
          .col(ColumnDef::new(Affiliates::PaymentDetails).text().not_null())
          .col(
            ColumnDef::new(Affiliates::CommissionRate)
              .decimal_len(5, 2)
              .not_null()
              .default("10.00"),
          )
          .col(
            ColumnDef::new(Affiliates::TotalClicks)
              .integer()
              .not_null()
              .default(0),
          )
          .col(
            ColumnDef::new(Affiliates::TotalSales)
              .integer()
              .not_null()
              .default(0),
          )
          .col(
            ColumnDef::new(Affiliates::TotalEarnings)
              .decimal_len(10, 2)
              .not_null()
              .default("0.00"),
          )
          .col(
            ColumnDef::new(Affiliates::PaidEarnings)
              .decimal_len(10, 2)
              .not_null()
              .default("0.00"),
          )
          .col(
            ColumnDef::new(Affiliates::PendingEarnings)
              .decimal_len(10, 2)
              .not_null()
              .default("0.00"),
          )
          .col(
            ColumnDef::new(Affiliates::IsActive)
              .boolean()
              .not_null()
              .default(true),
          )
          .col(
            ColumnDef::new(Affiliates::IsApproved)
              .boolean()
              .not_null()
              .default(false),
          )
          .col(ColumnDef::new(Affiliates::ApprovedBy).string().null())
          .col(ColumnDef::new(Affiliates::ApprovedAt).date_time().null())
          .col(ColumnDef::new(Affiliates::CreatedAt).date_time().not_null())
          .col(ColumnDef::new(Affiliates::UpdatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_affiliates_code")
          .table(Affiliates::Table)
          .col(Affiliates::AffiliateCode)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Affiliates::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Affiliates {
  Table,
  Id,
  AffiliateCode,
  FullName,
  Phone,
  PaymentMethod,
  PaymentDetails,
  CommissionRate,
  TotalClicks,
  TotalSales,
  TotalEarnings,
  PaidEarnings,
  PendingEarnings,
  IsActive,
  IsApproved,
  ApprovedBy,
  ApprovedAt,
  CreatedAt,
  UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 leads 表（已存在时跳过）
        manager
            .create_table(
                Table::create()
                    .table(Lead::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lead::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Lead::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Lead::FirstName).text().not_null())
                    .col(ColumnDef::new(Lead::LastName).text().not_null())
                    .col(ColumnDef::new(Lead::Email).text().not_null())
                    .col(ColumnDef::new(Lead::Phone).text().not_null())
                    .col(ColumnDef::new(Lead::Zip).text().not_null())
                    .col(ColumnDef::new(Lead::Ip).text().null())
                    .col(ColumnDef::new(Lead::UserAgent).text().null())
                    .col(ColumnDef::new(Lead::PageUrl).text().null())
                    .col(ColumnDef::new(Lead::ConsentText).text().not_null())
                    .col(ColumnDef::new(Lead::Brand).text().not_null())
                    .col(ColumnDef::new(Lead::Domain).text().not_null())
                    .col(ColumnDef::new(Lead::SubmittedAt).text().null())
                    .to_owned(),
            )
            .await?;

        // 创建时间索引，供导出与最近列表使用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_leads_created_at")
                    .table(Lead::Table)
                    .col(Lead::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_leads_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lead::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Lead {
    #[sea_orm(iden = "leads")]
    Table,
    Id,
    CreatedAt,
    FirstName,
    LastName,
    Email,
    Phone,
    Zip,
    Ip,
    UserAgent,
    PageUrl,
    ConsentText,
    Brand,
    Domain,
    SubmittedAt,
}

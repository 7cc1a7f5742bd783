use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Content::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Content::Title).string().not_null())
                    .col(ColumnDef::new(Content::SubTitle).string())
                    .col(ColumnDef::new(Content::Description).text())
                    .col(ColumnDef::new(Content::ImageUrl).string())
                    .col(ColumnDef::new(Content::Duration).integer())
                    .col(ColumnDef::new(Content::StartTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Content::EndTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Content::GenreList)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Content::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Content::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_created_at")
                    .table(Content::Table)
                    .col(Content::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Content {
    Table,
    Id,
    Title,
    SubTitle,
    Description,
    ImageUrl,
    Duration,
    StartTime,
    EndTime,
    GenreList,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_beers_table::Migration)]
    }
}

// Migration implementations

mod m20240101_000001_create_beers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_beers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Create beers table aligned with entities::beer Model
            manager
                .create_table(
                    Table::create()
                        .table(Beers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Beers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Beers::Name).string_len(200).not_null())
                        .col(ColumnDef::new(Beers::Brand).string_len(200).not_null())
                        .col(ColumnDef::new(Beers::Max).integer().not_null())
                        .col(
                            ColumnDef::new(Beers::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Beers::Type).string_len(20).not_null())
                        .to_owned(),
                )
                .await?;

            // Storage-level backstop for name uniqueness
            manager
                .create_index(
                    Index::create()
                        .name("idx_beers_name_unique")
                        .table(Beers::Table)
                        .col(Beers::Name)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Beers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Beers {
        Table,
        Id,
        Name,
        Brand,
        Max,
        Quantity,
        Type,
    }
}

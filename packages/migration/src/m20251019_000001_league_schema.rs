use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Leagues {
    Table,
    Id,
    Name,
    City,
    Country,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    Name,
    CoachName,
    LeagueId,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    FirstName,
    LastName,
    Age,
    JerseyNumber,
    TeamId,
}

#[derive(Iden)]
enum Referees {
    Table,
    Id,
    FirstName,
    LastName,
    Experience,
    CertificationLevel,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    Date,
    Location,
    LeagueId,
    HomeTeamId,
    AwayTeamId,
    RefereeId,
}

#[derive(Iden)]
enum MatchStats {
    Table,
    MatchId,
    HomeScore,
    AwayScore,
    PossessionHome,
    PossessionAway,
    FoulsHome,
    FoulsAway,
    CornersHome,
    CornersAway,
}

#[derive(Iden)]
enum PlayerMatchStats {
    Table,
    MatchId,
    PlayerId,
    Shots,
    ShotsOnTarget,
    Goals,
    Assists,
    MinutesPlayed,
    YellowCards,
    RedCards,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    CreatedAt,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn counter_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leagues::Table)
                    .if_not_exists()
                    .col(id_col(Leagues::Id))
                    .col(ColumnDef::new(Leagues::Name).string().not_null())
                    .col(ColumnDef::new(Leagues::City).string().not_null())
                    .col(ColumnDef::new(Leagues::Country).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(id_col(Teams::Id))
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::CoachName).string().not_null())
                    .col(ColumnDef::new(Teams::LeagueId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_league_id")
                            .from(Teams::Table, Teams::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_teams_league_id")
                    .table(Teams::Table)
                    .col(Teams::LeagueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(id_col(Players::Id))
                    .col(ColumnDef::new(Players::FirstName).string().not_null())
                    .col(ColumnDef::new(Players::LastName).string().not_null())
                    .col(ColumnDef::new(Players::Age).integer().not_null())
                    .col(ColumnDef::new(Players::JerseyNumber).integer().not_null())
                    .col(ColumnDef::new(Players::TeamId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_team_id")
                            .from(Players::Table, Players::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One jersey number per team
        manager
            .create_index(
                Index::create()
                    .name("ux_players_team_jersey")
                    .table(Players::Table)
                    .col(Players::TeamId)
                    .col(Players::JerseyNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Referees::Table)
                    .if_not_exists()
                    .col(id_col(Referees::Id))
                    .col(ColumnDef::new(Referees::FirstName).string().not_null())
                    .col(ColumnDef::new(Referees::LastName).string().not_null())
                    .col(ColumnDef::new(Referees::Experience).string().null())
                    .col(
                        ColumnDef::new(Referees::CertificationLevel)
                            .string()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(id_col(Matches::Id))
                    .col(
                        ColumnDef::new(Matches::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Matches::Location).string().not_null())
                    .col(ColumnDef::new(Matches::LeagueId).integer().not_null())
                    .col(ColumnDef::new(Matches::HomeTeamId).integer().not_null())
                    .col(ColumnDef::new(Matches::AwayTeamId).integer().not_null())
                    .col(ColumnDef::new(Matches::RefereeId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_league_id")
                            .from(Matches::Table, Matches::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_home_team_id")
                            .from(Matches::Table, Matches::HomeTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_away_team_id")
                            .from(Matches::Table, Matches::AwayTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_referee_id")
                            .from(Matches::Table, Matches::RefereeId)
                            .to(Referees::Table, Referees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_matches_date")
                    .table(Matches::Table)
                    .col(Matches::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchStats::MatchId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(counter_col(MatchStats::HomeScore))
                    .col(counter_col(MatchStats::AwayScore))
                    .col(
                        ColumnDef::new(MatchStats::PossessionHome)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .col(
                        ColumnDef::new(MatchStats::PossessionAway)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .col(counter_col(MatchStats::FoulsHome))
                    .col(counter_col(MatchStats::FoulsAway))
                    .col(counter_col(MatchStats::CornersHome))
                    .col(counter_col(MatchStats::CornersAway))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_stats_match_id")
                            .from(MatchStats::Table, MatchStats::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerMatchStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerMatchStats::MatchId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerMatchStats::PlayerId)
                            .integer()
                            .not_null(),
                    )
                    .col(counter_col(PlayerMatchStats::Shots))
                    .col(counter_col(PlayerMatchStats::ShotsOnTarget))
                    .col(counter_col(PlayerMatchStats::Goals))
                    .col(counter_col(PlayerMatchStats::Assists))
                    .col(counter_col(PlayerMatchStats::MinutesPlayed))
                    .col(counter_col(PlayerMatchStats::YellowCards))
                    .col(counter_col(PlayerMatchStats::RedCards))
                    .primary_key(
                        Index::create()
                            .col(PlayerMatchStats::MatchId)
                            .col(PlayerMatchStats::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_match_stats_match_id")
                            .from(PlayerMatchStats::Table, PlayerMatchStats::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_match_stats_player_id")
                            .from(PlayerMatchStats::Table, PlayerMatchStats::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_player_match_stats_player_id")
                    .table(PlayerMatchStats::Table)
                    .col(PlayerMatchStats::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dependents first
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(PlayerMatchStats::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(MatchStats::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Referees::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leagues::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

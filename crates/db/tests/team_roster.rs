//! Integration tests for the permanent roster and temporary pool.

use sqlx::PgPool;
use teampicker_core::types::DbId;
use teampicker_db::models::project::CreateProject;
use teampicker_db::repositories::{ProjectRepo, TeamRosterRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seeded_project(pool: &PgPool, name: &str, teams: &[&str]) -> DbId {
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
        },
    )
    .await
    .unwrap();
    for team in teams {
        TeamRosterRepo::add_permanent(pool, project.id, team)
            .await
            .unwrap();
    }
    project.id
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Permanent roster
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_permanent_roster_is_unique_per_project(pool: PgPool) {
    let a = seeded_project(&pool, "A", &["Team A"]).await;
    let b = seeded_project(&pool, "B", &["Team A"]).await;

    assert!(TeamRosterRepo::add_permanent(&pool, a, "Team A").await.is_err());
    assert_eq!(TeamRosterRepo::list_permanent(&pool, b).await.unwrap(), ["Team A"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_permanent(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B"]).await;

    assert!(TeamRosterRepo::remove_permanent(&pool, id, "Team A").await.unwrap());
    assert!(!TeamRosterRepo::remove_permanent(&pool, id, "Team A").await.unwrap());
    assert_eq!(TeamRosterRepo::list_permanent(&pool, id).await.unwrap(), ["Team B"]);
}

// ---------------------------------------------------------------------------
// Populate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_populate_copies_permanent_when_empty(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B", "Team C"]).await;

    let teams = TeamRosterRepo::populate(&pool, id).await.unwrap();

    assert_eq!(teams, owned(&["Team A", "Team B", "Team C"]));
    assert_eq!(TeamRosterRepo::list_temporary(&pool, id).await.unwrap(), teams);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_populate_is_idempotent(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B"]).await;

    let first = TeamRosterRepo::populate(&pool, id).await.unwrap();
    let second = TeamRosterRepo::populate(&pool, id).await.unwrap();

    assert_eq!(first, second);
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM project_teams_temporary WHERE project_id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_populate_keeps_mid_cycle_pool(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B", "Team C"]).await;
    TeamRosterRepo::replace_temporary(&pool, id, &owned(&["Team B"]))
        .await
        .unwrap();

    let teams = TeamRosterRepo::populate(&pool, id).await.unwrap();

    assert_eq!(teams, ["Team B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_populate_does_not_duplicate(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B", "Team C"]).await;

    let (a, b) = tokio::join!(
        TeamRosterRepo::populate(&pool, id),
        TeamRosterRepo::populate(&pool, id)
    );
    a.unwrap();
    b.unwrap();

    let pool_now = TeamRosterRepo::list_temporary(&pool, id).await.unwrap();
    assert_eq!(pool_now.len(), 3);
}

// ---------------------------------------------------------------------------
// Reset / replace / remove
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reset_matches_permanent_roster(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B", "Team C"]).await;
    TeamRosterRepo::replace_temporary(&pool, id, &owned(&["Team C", "Stray"]))
        .await
        .unwrap();

    let teams = TeamRosterRepo::reset(&pool, id).await.unwrap();

    let permanent = TeamRosterRepo::list_permanent(&pool, id).await.unwrap();
    assert_eq!(sorted(teams.clone()), sorted(permanent));
    assert_eq!(TeamRosterRepo::list_temporary(&pool, id).await.unwrap(), teams);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reset_with_empty_roster_clears_pool(pool: PgPool) {
    let id = seeded_project(&pool, "P", &[]).await;
    TeamRosterRepo::replace_temporary(&pool, id, &owned(&["Leftover"]))
        .await
        .unwrap();

    let teams = TeamRosterRepo::reset(&pool, id).await.unwrap();

    assert!(teams.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_accepts_names_outside_roster(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A"]).await;

    TeamRosterRepo::replace_temporary(&pool, id, &owned(&["Guest", "Team A", "Guest"]))
        .await
        .unwrap();

    assert_eq!(
        TeamRosterRepo::list_temporary(&pool, id).await.unwrap(),
        ["Guest", "Team A"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_with_empty_list_empties_pool(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A"]).await;
    TeamRosterRepo::populate(&pool, id).await.unwrap();

    TeamRosterRepo::replace_temporary(&pool, id, &[]).await.unwrap();

    assert!(TeamRosterRepo::list_temporary(&pool, id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_temporary_missing_team_is_noop(pool: PgPool) {
    let id = seeded_project(&pool, "P", &["Team A", "Team B"]).await;
    TeamRosterRepo::populate(&pool, id).await.unwrap();

    assert!(!TeamRosterRepo::remove_temporary(&pool, id, "Nobody").await.unwrap());
    assert!(TeamRosterRepo::remove_temporary(&pool, id, "Team A").await.unwrap());
    assert_eq!(TeamRosterRepo::list_temporary(&pool, id).await.unwrap(), ["Team B"]);
}

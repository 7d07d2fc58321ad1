use sqlx::PgPool;

use crate::Result;

/// Create the speech tables if they do not exist.
///
/// `user_name` and `meeting_title` come back denormalized through the join
/// in the speech listing query; the tables themselves stay normalized.
pub async fn apply(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS meetings (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            start_time TIMESTAMPTZ
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS speeches (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            meeting_id UUID NOT NULL REFERENCES meetings(id),
            timestamp TIMESTAMPTZ NOT NULL,
            content TEXT NOT NULL DEFAULT ''
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_speeches_timestamp ON speeches(timestamp)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_speeches_meeting ON speeches(meeting_id)")
        .execute(pool)
        .await?;

    tracing::info!("Speech schema verified");

    Ok(())
}

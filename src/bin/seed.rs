//! CLI tool for seeding demo data.
//!
//! Inserts three demo users, three spots, reviews, and images so the API can
//! be exercised immediately after startup.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations and insert demo data
//! cargo run --bin seed -- run
//!
//! # Remove the demo data again
//! cargo run --bin seed -- reset
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

use spotstay::utils::password::hash_password;

/// Demo accounts created by the seeder. Passwords are hashed at insert time.
const DEMO_USERS: &[(&str, &str, &str, &str, &str)] = &[
    ("demo@user.io", "Demo-lition", "Demo", "Lition", "password"),
    ("marnie@user.io", "FakeUser1", "Marnie", "Fields", "password2"),
    ("bobbie@user.io", "FakeUser2", "Bobbie", "Branch", "password3"),
];

/// CLI tool for seeding demo data.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations and insert demo users, spots, reviews, and images
    Run {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete the demo data
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Run { yes } => run_seed(&pool, yes).await?,
        Commands::Reset { yes } => reset_seed(&pool, yes).await?,
    }

    Ok(())
}

async fn run_seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Seed demo data".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert demo users, spots, reviews, and images?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    let user_ids = seed_users(pool).await?;
    println!("{} {} users", "Seeded".green(), user_ids.len());

    let spot_ids = seed_spots(pool, &user_ids).await?;
    println!("{} {} spots", "Seeded".green(), spot_ids.len());

    let review_ids = seed_reviews(pool, &spot_ids, &user_ids).await?;
    println!("{} {} reviews", "Seeded".green(), review_ids.len());

    seed_spot_images(pool, &spot_ids).await?;
    seed_review_images(pool, &review_ids).await?;
    println!("{} images", "Seeded".green());

    println!();
    println!("{}", "Done. Log in with:".bright_white().bold());
    for (email, _, _, _, password) in DEMO_USERS {
        println!("  {} / {}", email.cyan(), password.bright_yellow());
    }

    Ok(())
}

/// Inserts the demo users, reusing existing rows so the seeder is idempotent.
async fn seed_users(pool: &PgPool) -> Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(DEMO_USERS.len());

    for (email, username, first_name, last_name, password) in DEMO_USERS {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(pool)
                .await?;

        if let Some(id) = existing {
            ids.push(id);
            continue;
        }

        let hashed = hash_password(password)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {:?}", e))?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, username, first_name, last_name, hashed_password) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(email)
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(&hashed)
        .fetch_one(pool)
        .await?;

        ids.push(id);
    }

    Ok(ids)
}

async fn seed_spots(pool: &PgPool, user_ids: &[i64]) -> Result<Vec<i64>> {
    let spots: [(i64, &str, &str, &str, f64, f64, &str, &str, f64); 3] = [
        (
            user_ids[0],
            "123 Disney Lane",
            "San Francisco",
            "California",
            37.7645358,
            -122.4730327,
            "App Academy",
            "Place where web developers are created",
            123.0,
        ),
        (
            user_ids[1],
            "456 Coding Blvd",
            "New York",
            "New York",
            40.7127753,
            -74.0059728,
            "Coding Paradise",
            "A peaceful place to code",
            250.0,
        ),
        (
            user_ids[2],
            "789 Tech Street",
            "Seattle",
            "Washington",
            47.6062095,
            -122.3320708,
            "Tech Haven",
            "Perfect spot for tech enthusiasts",
            175.0,
        ),
    ];

    let mut ids = Vec::with_capacity(spots.len());

    for (owner_id, address, city, state, lat, lng, name, description, price) in spots {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM spots WHERE name = $1 AND owner_id = $2")
                .bind(name)
                .bind(owner_id)
                .fetch_optional(pool)
                .await?;

        if let Some(id) = existing {
            ids.push(id);
            continue;
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO spots (owner_id, address, city, state, country, lat, lng, name, description, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
        )
        .bind(owner_id)
        .bind(address)
        .bind(city)
        .bind(state)
        .bind("United States of America")
        .bind(lat)
        .bind(lng)
        .bind(name)
        .bind(description)
        .bind(price)
        .fetch_one(pool)
        .await?;

        ids.push(id);
    }

    Ok(ids)
}

async fn seed_reviews(pool: &PgPool, spot_ids: &[i64], user_ids: &[i64]) -> Result<Vec<i64>> {
    let reviews: [(i64, i64, &str, i32); 6] = [
        (spot_ids[0], user_ids[1], "This was an awesome spot!", 5),
        (spot_ids[0], user_ids[2], "Pretty good location.", 4),
        (spot_ids[1], user_ids[0], "Great coding atmosphere", 5),
        (spot_ids[1], user_ids[2], "Decent spot for work", 3),
        (spot_ids[2], user_ids[0], "Amazing tech community", 5),
        (spot_ids[2], user_ids[1], "Good spot for networking", 4),
    ];

    let mut ids = Vec::with_capacity(reviews.len());

    for (spot_id, user_id, text, stars) in reviews {
        // One review per (spot, user); reuse the row on re-runs.
        let id: Option<i64> = sqlx::query_scalar(
            "INSERT INTO reviews (spot_id, user_id, review, stars) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT reviews_spot_id_user_id_key DO NOTHING \
             RETURNING id",
        )
        .bind(spot_id)
        .bind(user_id)
        .bind(text)
        .bind(stars)
        .fetch_optional(pool)
        .await?;

        let id = match id {
            Some(id) => id,
            None => {
                sqlx::query_scalar("SELECT id FROM reviews WHERE spot_id = $1 AND user_id = $2")
                    .bind(spot_id)
                    .bind(user_id)
                    .fetch_one(pool)
                    .await?
            }
        };

        ids.push(id);
    }

    Ok(ids)
}

async fn seed_spot_images(pool: &PgPool, spot_ids: &[i64]) -> Result<()> {
    for (index, spot_id) in spot_ids.iter().enumerate() {
        let preview_url = format!("https://example.com/image{}.jpg", index * 2 + 1);
        let extra_url = format!("https://example.com/image{}.jpg", index * 2 + 2);

        for (url, preview) in [(preview_url, true), (extra_url, false)] {
            let exists: Option<i64> =
                sqlx::query_scalar("SELECT id FROM spot_images WHERE spot_id = $1 AND url = $2")
                    .bind(spot_id)
                    .bind(&url)
                    .fetch_optional(pool)
                    .await?;

            if exists.is_some() {
                continue;
            }

            sqlx::query("INSERT INTO spot_images (spot_id, url, preview) VALUES ($1, $2, $3)")
                .bind(spot_id)
                .bind(&url)
                .bind(preview)
                .execute(pool)
                .await?;
        }
    }

    Ok(())
}

async fn seed_review_images(pool: &PgPool, review_ids: &[i64]) -> Result<()> {
    for (index, review_id) in review_ids.iter().take(3).enumerate() {
        let url = format!("https://example.com/review{}-image1.jpg", index + 1);

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM review_images WHERE review_id = $1 AND url = $2")
                .bind(review_id)
                .bind(&url)
                .fetch_optional(pool)
                .await?;

        if exists.is_some() {
            continue;
        }

        sqlx::query("INSERT INTO review_images (review_id, url) VALUES ($1, $2)")
            .bind(review_id)
            .bind(&url)
            .execute(pool)
            .await?;
    }

    Ok(())
}

/// Removes the demo users; spots, reviews, and images cascade away with them.
async fn reset_seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Reset demo data".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete the demo users and everything they own?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let emails: Vec<String> = DEMO_USERS.iter().map(|u| u.0.to_string()).collect();

    let result = sqlx::query("DELETE FROM users WHERE email = ANY($1)")
        .bind(&emails)
        .execute(pool)
        .await?;

    println!(
        "{} {} demo users (cascaded to spots, reviews, images)",
        "Deleted".green(),
        result.rows_affected()
    );

    Ok(())
}

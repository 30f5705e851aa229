#![forbid(unsafe_code)]

mod config;
mod page;
mod schema;

use std::{convert::Infallible, sync::Arc};

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_warp::{GraphQLBadRequest, GraphQLResponse};
use dotenvy::dotenv;
use leaderboard::bucket::{Bucket, LocalBucket, NoBucket};
use log::{error, info};
use sea_orm::DatabaseConnection;
use warp::{
    http::StatusCode,
    reply::{self, Html},
    Filter, Rejection, Reply,
};

use crate::{config::Config, schema::LeaderboardSchema};

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("Could not load configuration")]
    Config(#[from] config::Error),

    #[error("Could not open database")]
    OpenDatabase(#[from] database::Error),
}

fn internal_error() -> Box<dyn Reply> {
    Box::new(reply::with_status(
        reply::reply(),
        StatusCode::INTERNAL_SERVER_ERROR,
    ))
}

fn not_found() -> Box<dyn Reply> {
    match page::not_found() {
        Ok(html) => Box::new(reply::with_status(reply::html(html), StatusCode::NOT_FOUND)),
        Err(err) => {
            error!("Could not render not found page: {:?}", err);
            internal_error()
        }
    }
}

async fn leaderboard_page(
    db: DatabaseConnection,
    slug: Option<String>,
) -> Result<Box<dyn Reply>, Infallible> {
    Ok(match page::leaderboard(&db, slug.as_deref()).await {
        Ok(Some(html)) => Box::new(reply::html(html)),
        Ok(None) => not_found(),
        Err(err) => {
            error!("Could not render leaderboard: {:?}", err);
            internal_error()
        }
    })
}

async fn recover(rejection: Rejection) -> Result<Box<dyn Reply>, Rejection> {
    if let Some(GraphQLBadRequest(err)) = rejection.find() {
        return Ok(Box::new(reply::with_status(
            err.to_string(),
            StatusCode::BAD_REQUEST,
        )));
    }

    if rejection.is_not_found() {
        return Ok(not_found());
    }

    Err(rejection)
}

fn bucket(config: &Config) -> Arc<dyn Bucket> {
    match &config.bucket {
        Some(bucket) => {
            info!("Serving media from {}", bucket.dir.display());
            Arc::new(LocalBucket::new(bucket.dir.clone(), bucket.domain.as_str()))
        }
        None => {
            info!("No media bucket configured");
            Arc::new(NoBucket)
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    pretty_env_logger::init_timed();
    dotenv().ok();

    Ok(main_().await?)
}

async fn main_() -> Result<(), Error> {
    let config = Config::from_env()?;

    let db = database::connect(&config.database_url).await?;
    database::migrate(&db).await?;

    let schema = schema::build(db.clone(), bucket(&config));

    let with_db = {
        let db = db.clone();
        warp::any().map(move || db.clone())
    };

    // GET / and GET /leaderboard
    let latest_route = warp::path::end()
        .or(warp::path!("leaderboard"))
        .unify()
        .and(with_db.clone())
        .and_then(|db| leaderboard_page(db, None));

    // GET /tournament/:SLUG
    let tournament_route = warp::path!("tournament" / String)
        .and(with_db)
        .and_then(|slug, db| leaderboard_page(db, Some(slug)));

    // GET /graphql
    let playground_route = warp::path!("graphql").map(|| -> Html<String> {
        reply::html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
    });

    // POST /graphql
    let graphql_route = warp::path!("graphql")
        .and(warp::post())
        .and(async_graphql_warp::graphql(schema))
        .and_then(
            |(schema, request): (LeaderboardSchema, async_graphql::Request)| async move {
                Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
            },
        );

    let routes = graphql_route
        .or(warp::get().and(latest_route.or(tournament_route).or(playground_route)))
        .recover(recover);

    info!("Listening on {}", config.listen_addr);
    warp::serve(routes).run(config.listen_addr).await;

    Ok(())
}

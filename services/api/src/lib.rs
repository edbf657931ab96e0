mod cli;
mod infra;
mod recommend;
mod routes;
mod server;

use shoe_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

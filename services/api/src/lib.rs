mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use findr_rewards::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

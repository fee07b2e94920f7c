mod cli;
mod commands;
mod infra;
mod mailer;
mod routes;
mod server;

use mindtrx::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

use lambda_http::{run, Error};
use tracing::info;
use library_catalog::catalog::controller::build_router;
use library_catalog::catalog::factory;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::core::repository::RepositoryStore;
use library_catalog::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());

    if config.store != RepositoryStore::DynamoDB {
        // dev mode: point the runtime at the local Lambda runtime interface emulator
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    info!(branch = config.branch_id.as_str(), store = ?config.store, table = config.table_name.as_str(),
        "starting catalog service");
    let catalog_service = factory::create_catalog_service(&config).await;
    let app = build_router(AppState::new(catalog_service));

    run(app).await
}

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::middleware::auth::TokenKeys;
use crate::api::router::AppState;
use crate::application::{
    ports::{JobRepository, ReferenceChecker},
    use_cases::{
        CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase, UpdateJobUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::persistence::{PostgresJobRepository, PostgresReferenceChecker};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    job_repo: Option<Arc<dyn JobRepository>>,
    reference_checker: Option<Arc<dyn ReferenceChecker>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            job_repo: None,
            reference_checker: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
            self.config.db_idle_timeout_secs,
            self.config.db_max_lifetime_secs
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an already connected pool (migrations are the caller's concern)
    pub fn with_pool(mut self, pool: sqlx::PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Initialize the persistence adapters
    pub fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        let job_repo: Arc<dyn JobRepository> = Arc::new(PostgresJobRepository::new(pool.clone()));
        let reference_checker: Arc<dyn ReferenceChecker> =
            Arc::new(PostgresReferenceChecker::new(pool.clone()));

        self.job_repo = Some(job_repo);
        self.reference_checker = Some(reference_checker);

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Swap in other adapters, e.g. test doubles
    pub fn with_repositories(
        mut self,
        job_repo: Arc<dyn JobRepository>,
        reference_checker: Arc<dyn ReferenceChecker>,
    ) -> Self {
        self.job_repo = Some(job_repo);
        self.reference_checker = Some(reference_checker);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let job_repo = self.job_repo.ok_or("Job repository not initialized")?;
        let reference_checker = self
            .reference_checker
            .ok_or("Reference checker not initialized")?;

        let create_job_use_case = Arc::new(CreateJobUseCase::new(
            Arc::clone(&job_repo),
            reference_checker,
        ));
        let get_job_use_case = Arc::new(GetJobUseCase::new(Arc::clone(&job_repo)));
        let list_jobs_use_case = Arc::new(ListJobsUseCase::new(Arc::clone(&job_repo)));
        let update_job_use_case = Arc::new(UpdateJobUseCase::new(Arc::clone(&job_repo)));
        let delete_job_use_case = Arc::new(DeleteJobUseCase::new(job_repo));

        info!("Application layer initialized");

        Ok(AppState {
            pool: Arc::new(pool),
            create_job_use_case,
            get_job_use_case,
            list_jobs_use_case,
            update_job_use_case,
            delete_job_use_case,
            token_keys: Arc::new(TokenKeys::from_secret(&self.config.secret_key)),
            config: self.config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

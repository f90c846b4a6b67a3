pub mod store;
pub use store::{Direction, Document, Fields, OrderBy, RecordStore};
pub mod memory_store;
pub use memory_store::InMemoryStore;
pub mod pg_store;
pub use pg_store::PgDocumentStore;
pub mod repository;
pub use repository::{Record, Repository};
pub mod user_repo;
pub use user_repo::UserRepository;

use crate::models::{
    activity::Activity,
    contact::Contact,
    deal::Deal,
    preferences::UserPreferences,
    task::Task,
    tax::TaxRecord,
    team::TeamMember,
};

// Um repositório por coleção
pub type ContactRepository = Repository<Contact>;
pub type DealRepository = Repository<Deal>;
pub type TaskRepository = Repository<Task>;
pub type ActivityRepository = Repository<Activity>;
pub type TaxRepository = Repository<TaxRecord>;
pub type TeamRepository = Repository<TeamMember>;
pub type PreferencesRepository = Repository<UserPreferences>;

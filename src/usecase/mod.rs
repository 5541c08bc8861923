//! Transactional business operations.
//!
//! Each usecase owns the pool and opens exactly one transaction per call. Writes
//! commit at the end; any `?` before that drops the transaction, which rolls it back.
//! Reads run in a read-only transaction that is simply dropped.

pub mod card;
pub mod list;
pub mod project;
pub mod user;

pub use card::CardUsecase;
pub use list::ListUsecase;
pub use project::ProjectUsecase;
pub use user::UserUsecase;

use sqlx::PgPool;

/// All usecases built over one pool, ready to be registered as application data.
#[derive(Clone)]
pub struct Usecases {
    pub users: UserUsecase,
    pub projects: ProjectUsecase,
    pub lists: ListUsecase,
    pub cards: CardUsecase,
}

impl Usecases {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserUsecase::new(pool.clone()),
            projects: ProjectUsecase::new(pool.clone()),
            lists: ListUsecase::new(pool.clone()),
            cards: CardUsecase::new(pool),
        }
    }
}

//! Business logic services

pub mod fines;
pub mod loans;
pub mod users;

use crate::{config::LoanPolicyConfig, db::Transactor, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub loans: loans::LoansService,
    pub users: users::UsersService,
    pub fines: fines::FineCalculator,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, policy: &LoanPolicyConfig) -> Self {
        let transactor = Transactor::new(repository.pool.clone());
        let fines = fines::FineCalculator::new(policy.loan_days, policy.fine_per_day);
        Self {
            loans: loans::LoansService::new(repository.clone(), transactor, fines.clone()),
            users: users::UsersService::new(repository),
            fines,
        }
    }
}

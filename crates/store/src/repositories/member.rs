//! Member repository.

use std::sync::Arc;

use async_trait::async_trait;
use chama_core::auth::Capabilities;
use chama_core::members::{Member, MemberError, MemberService, Registration, RegistrationForm};
use chama_shared::config::SecurityConfig;
use tokio::sync::RwLock;

use crate::directory::CredentialDirectory;

/// Member directory backed by a shared vector.
#[derive(Debug, Clone, Default)]
pub struct MemberRepository {
    members: Arc<RwLock<Vec<Member>>>,
}

impl MemberRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member as-is. Used for seeding.
    pub async fn insert(&self, member: Member) {
        self.members.write().await.push(member);
    }

    /// Every member, active or not, in registration order.
    pub async fn all(&self) -> Vec<Member> {
        self.members.read().await.clone()
    }

    /// Number of active members.
    pub async fn active_count(&self) -> usize {
        self.members.read().await.iter().filter(|m| m.is_active).count()
    }

    /// Finds a member by code, any case.
    pub async fn find_by_code(&self, member_code: &str) -> Option<Member> {
        let members = self.members.read().await;
        MemberService::find_by_code(&members, member_code).cloned()
    }

    /// Searches names and codes.
    pub async fn search(&self, term: &str) -> Vec<Member> {
        let members = self.members.read().await;
        MemberService::search(&members, term).into_iter().cloned().collect()
    }

    /// Registers a new member under the write lock so generated codes stay unique.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor may not register members or the form is invalid.
    pub async fn register(
        &self,
        form: RegistrationForm,
        actor: &Capabilities,
        security: &SecurityConfig,
    ) -> Result<Registration, MemberError> {
        let mut members = self.members.write().await;
        let registration = MemberService::register(form, actor, security, &members)?;
        members.push(registration.member.clone());
        Ok(registration)
    }

    /// Applies `change` to the member with this code and returns its result
    /// together with the updated member.
    ///
    /// # Errors
    ///
    /// Returns `MemberError::NotFound` for an unknown code, or whatever `change` returns.
    pub async fn update<T>(
        &self,
        member_code: &str,
        change: impl FnOnce(&mut Member) -> Result<T, MemberError>,
    ) -> Result<(T, Member), MemberError> {
        let mut members = self.members.write().await;
        let member = MemberService::require_mut(&mut members, member_code)?;
        let output = change(&mut *member)?;
        Ok((output, member.clone()))
    }
}

#[async_trait]
impl CredentialDirectory for MemberRepository {
    async fn find_member_by_credentials(&self, member_code: &str, pin: &str) -> Option<Member> {
        let members = self.members.read().await;
        MemberService::find_by_credentials(&members, member_code, pin).cloned()
    }
}

//! Stateless member directory logic.
//!
//! Storage lives elsewhere; these functions take the current member list
//! (or a single member) and either answer a query or mutate in place after
//! checking the actor's capabilities.

use chama_shared::config::SecurityConfig;
use chama_shared::types::{MemberCode, MemberId};
use chrono::Utc;

use super::error::MemberError;
use super::member::{Member, MemberUpdate};
use super::registration::{Registration, RegistrationForm, generate_member_code};
use crate::auth::{
    AuthError, Capabilities, Capability, UserRole, generate_pin, hash_pin, verify_pin,
};

/// Stateless service for member lookups and administration.
pub struct MemberService;

impl MemberService {
    /// Finds the active member matching a code and PIN.
    ///
    /// The code is compared case-insensitively and the PIN against the
    /// stored hash. Unknown codes, wrong PINs, inactive accounts and
    /// unreadable hashes all yield `None`.
    #[must_use]
    pub fn find_by_credentials<'a>(
        members: &'a [Member],
        member_code: &str,
        pin: &str,
    ) -> Option<&'a Member> {
        members
            .iter()
            .filter(|m| m.is_active && m.member_code.matches(member_code))
            .find(|m| verify_pin(pin, &m.pin_hash).unwrap_or(false))
    }

    /// Finds a member by code, active or not.
    #[must_use]
    pub fn find_by_code<'a>(members: &'a [Member], member_code: &str) -> Option<&'a Member> {
        members.iter().find(|m| m.member_code.matches(member_code))
    }

    /// Case-insensitive substring search over names and member codes.
    ///
    /// A blank term returns everyone, in directory order.
    #[must_use]
    pub fn search<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
        let term = term.trim().to_lowercase();
        members
            .iter()
            .filter(|m| {
                term.is_empty()
                    || m.name.to_lowercase().contains(&term)
                    || m.member_code.as_str().contains(&term)
            })
            .collect()
    }

    /// Registers a new member with a generated code and temporary PIN.
    pub fn register(
        form: RegistrationForm,
        actor: &Capabilities,
        security: &SecurityConfig,
        existing: &[Member],
    ) -> Result<Registration, MemberError> {
        actor.require(Capability::RegisterMembers)?;
        form.validate()?;

        let id_number = form.id_number.trim().to_string();
        if existing.iter().any(|m| m.id_number == id_number) {
            return Err(MemberError::DuplicateIdNumber(id_number));
        }

        let name = form.name.trim().to_string();
        let member_code = generate_member_code(&name, security.member_code_prefix_len, |c| {
            existing.iter().any(|m| &m.member_code == c)
        })?;
        let temporary_pin = generate_pin(security.pin_length);
        let pin_hash = hash_pin(&temporary_pin).map_err(AuthError::from)?;

        let member = Member {
            id: MemberId::new(),
            member_code,
            name,
            id_number,
            phone_number: form.phone_number.trim().to_string(),
            pin_hash,
            role: form.role,
            passport_photo: form.passport_photo,
            document_photo: form.document_photo,
            created_at: Utc::now(),
            is_active: true,
        };

        Ok(Registration {
            member,
            temporary_pin,
        })
    }

    /// Replaces a member's PIN with a fresh temporary one and returns it.
    pub fn reset_pin(
        member: &mut Member,
        actor: &Capabilities,
        security: &SecurityConfig,
    ) -> Result<String, MemberError> {
        actor.require(Capability::ManageMembers)?;

        let pin = generate_pin(security.pin_length);
        member.pin_hash = hash_pin(&pin).map_err(AuthError::from)?;
        Ok(pin)
    }

    /// Assigns a new role.
    pub fn update_role(
        member: &mut Member,
        role: UserRole,
        actor: &Capabilities,
    ) -> Result<(), MemberError> {
        actor.require(Capability::ManageMembers)?;
        member.role = role;
        Ok(())
    }

    /// Applies edited details. Provided fields must not be blank.
    pub fn update_details(
        member: &mut Member,
        update: MemberUpdate,
        actor: &Capabilities,
    ) -> Result<(), MemberError> {
        actor.require(Capability::ManageMembers)?;

        let fields = [&update.name, &update.id_number, &update.phone_number];
        if fields
            .iter()
            .any(|f| f.as_deref().is_some_and(|v| v.trim().is_empty()))
        {
            return Err(MemberError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        if let Some(name) = update.name {
            member.name = name.trim().to_string();
        }
        if let Some(id_number) = update.id_number {
            member.id_number = id_number.trim().to_string();
        }
        if let Some(phone_number) = update.phone_number {
            member.phone_number = phone_number.trim().to_string();
        }
        Ok(())
    }

    /// Soft-deletes a member. Their ledger history is kept.
    pub fn deactivate(member: &mut Member, actor: &Capabilities) -> Result<(), MemberError> {
        actor.require(Capability::ManageMembers)?;
        member.is_active = false;
        Ok(())
    }

    /// Looks up a member for mutation or reports `NotFound`.
    pub fn require_mut<'a>(
        members: &'a mut [Member],
        member_code: &str,
    ) -> Result<&'a mut Member, MemberError> {
        members
            .iter_mut()
            .find(|m| m.member_code.matches(member_code))
            .ok_or_else(|| MemberError::NotFound(MemberCode::new(member_code)))
    }
}

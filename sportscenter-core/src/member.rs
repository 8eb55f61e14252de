use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::MemberRepository;
use crate::{CoreError, CoreResult};

pub const MEMBER_NOT_FOUND: &str = "Member not found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub subscription_status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Suspended,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "ACTIVE",
            SubscriptionStatus::Inactive => "INACTIVE",
            SubscriptionStatus::Suspended => "SUSPENDED",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Plain CRUD over the member directory, no business rules.
#[derive(Clone)]
pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: MemberInput) -> CoreResult<Member> {
        let now = Utc::now();
        let member = Member {
            id: Uuid::nil(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            subscription_status: SubscriptionStatus::Active,
            created_at: now,
            updated_at: now,
        };
        Ok(self.repo.insert(member).await?)
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<Member> {
        self.repo
            .find(id)
            .await?
            .ok_or(CoreError::not_found(MEMBER_NOT_FOUND, id))
    }

    pub async fn list_all(&self) -> CoreResult<Vec<Member>> {
        Ok(self.repo.find_all().await?)
    }

    /// Update rewrites name and phone only. Email and subscription
    /// status are never touched by this path.
    pub async fn update(&self, id: Uuid, input: MemberInput) -> CoreResult<Member> {
        let mut member = self
            .repo
            .find(id)
            .await?
            .ok_or(CoreError::not_found(MEMBER_NOT_FOUND, id))?;

        member.first_name = input.first_name;
        member.last_name = input.last_name;
        member.phone = input.phone;
        member.updated_at = Utc::now();

        Ok(self.repo.update(member).await?)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        if !self.repo.exists(id).await? {
            return Err(CoreError::not_found(MEMBER_NOT_FOUND, id));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}

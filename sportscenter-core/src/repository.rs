use async_trait::async_trait;
use uuid::Uuid;

use crate::activity::Activity;
use crate::booking::Booking;
use crate::member::Member;

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for booking records.
///
/// The store is the identifier authority: `insert` assigns the id and
/// returns the stored record. Filtered lookups return an empty vec when
/// nothing matches.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: Booking) -> Result<Booking, RepoError>;

    async fn find(&self, id: Uuid) -> Result<Option<Booking>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Booking>, RepoError>;

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<Booking>, RepoError>;

    async fn find_by_activity(&self, activity_id: Uuid) -> Result<Vec<Booking>, RepoError>;

    async fn update(&self, booking: Booking) -> Result<Booking, RepoError>;

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Repository trait for the activity directory.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn insert(&self, activity: Activity) -> Result<Activity, RepoError>;

    async fn find(&self, id: Uuid) -> Result<Option<Activity>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Activity>, RepoError>;

    async fn update(&self, activity: Activity) -> Result<Activity, RepoError>;

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Repository trait for the member directory.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn insert(&self, member: Member) -> Result<Member, RepoError>;

    async fn find(&self, id: Uuid) -> Result<Option<Member>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Member>, RepoError>;

    async fn update(&self, member: Member) -> Result<Member, RepoError>;

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

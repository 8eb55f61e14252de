use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use sportscenter_core::activity::Activity;
use sportscenter_core::booking::Booking;
use sportscenter_core::member::Member;
use sportscenter_core::repository::{
    ActivityRepository, BookingRepository, MemberRepository, RepoError,
};

/// Insertion-ordered in-memory record store.
///
/// One table per aggregate, each behind its own lock. The store is the
/// identifier authority: `insert` assigns a fresh id. Read-modify-write
/// sequences running above this store are not guarded against
/// interleaving; the last `update` wins.
#[derive(Default)]
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
    activities: RwLock<Vec<Activity>>,
    members: RwLock<Vec<Member>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn insert(&self, mut booking: Booking) -> Result<Booking, RepoError> {
        booking.id = Uuid::new_v4();
        let mut table = self.bookings.write().await;
        table.push(booking.clone());
        Ok(booking)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Booking>, RepoError> {
        let table = self.bookings.read().await;
        Ok(table.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, RepoError> {
        let table = self.bookings.read().await;
        Ok(table.clone())
    }

    async fn find_by_member(&self, member_id: Uuid) -> Result<Vec<Booking>, RepoError> {
        let table = self.bookings.read().await;
        Ok(table
            .iter()
            .filter(|b| b.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn find_by_activity(&self, activity_id: Uuid) -> Result<Vec<Booking>, RepoError> {
        let table = self.bookings.read().await;
        Ok(table
            .iter()
            .filter(|b| b.activity_id == activity_id)
            .cloned()
            .collect())
    }

    async fn update(&self, booking: Booking) -> Result<Booking, RepoError> {
        let mut table = self.bookings.write().await;
        let slot = table
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| format!("No booking record: {}", booking.id))?;
        *slot = booking.clone();
        Ok(booking)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        let table = self.bookings.read().await;
        Ok(table.iter().any(|b| b.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut table = self.bookings.write().await;
        table.retain(|b| b.id != id);
        Ok(())
    }
}

#[async_trait]
impl ActivityRepository for MemoryStore {
    async fn insert(&self, mut activity: Activity) -> Result<Activity, RepoError> {
        activity.id = Uuid::new_v4();
        let mut table = self.activities.write().await;
        table.push(activity.clone());
        Ok(activity)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Activity>, RepoError> {
        let table = self.activities.read().await;
        Ok(table.iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Activity>, RepoError> {
        let table = self.activities.read().await;
        Ok(table.clone())
    }

    async fn update(&self, activity: Activity) -> Result<Activity, RepoError> {
        let mut table = self.activities.write().await;
        let slot = table
            .iter_mut()
            .find(|a| a.id == activity.id)
            .ok_or_else(|| format!("No activity record: {}", activity.id))?;
        *slot = activity.clone();
        Ok(activity)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        let table = self.activities.read().await;
        Ok(table.iter().any(|a| a.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut table = self.activities.write().await;
        table.retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn insert(&self, mut member: Member) -> Result<Member, RepoError> {
        member.id = Uuid::new_v4();
        let mut table = self.members.write().await;
        table.push(member.clone());
        Ok(member)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Member>, RepoError> {
        let table = self.members.read().await;
        Ok(table.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, RepoError> {
        let table = self.members.read().await;
        Ok(table.clone())
    }

    async fn update(&self, member: Member) -> Result<Member, RepoError> {
        let mut table = self.members.write().await;
        let slot = table
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| format!("No member record: {}", member.id))?;
        *slot = member.clone();
        Ok(member)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        let table = self.members.read().await;
        Ok(table.iter().any(|m| m.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut table = self.members.write().await;
        table.retain(|m| m.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use sportscenter_core::activity::{ActivityInput, ActivityService};
    use sportscenter_core::booking::{
        BookingService, BookingStatus, BOOKING_MISSING_ON_DELETE, BOOKING_NOT_FOUND,
    };
    use sportscenter_core::member::{MemberInput, MemberService, SubscriptionStatus};
    use sportscenter_core::CoreError;

    fn booking_service() -> BookingService {
        BookingService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_forces_confirmed_status() {
        let svc = booking_service();
        let booking = svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();

        assert_eq!(booking.status, Some(BookingStatus::Confirmed));
        assert!(booking.cancellation_date.is_none());
        assert_eq!(booking.booking_date, booking.created_at);
        assert_ne!(booking.id, Uuid::nil());
    }

    #[tokio::test]
    async fn cancel_stamps_cancellation_and_keeps_creation_fields() {
        let svc = booking_service();
        let created = svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();

        let cancelled = svc.cancel(created.id).await.unwrap();

        assert_eq!(cancelled.status, Some(BookingStatus::Cancelled));
        assert!(cancelled.cancellation_date.is_some());
        assert_eq!(cancelled.booking_date, created.booking_date);
        assert_eq!(cancelled.created_at, created.created_at);
        assert!(cancelled.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn second_cancel_is_not_guarded_and_overwrites_timestamp() {
        let svc = booking_service();
        let created = svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();

        let first = svc.cancel(created.id).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = svc.cancel(created.id).await.unwrap();

        assert_eq!(second.status, Some(BookingStatus::Cancelled));
        assert!(second.cancellation_date.unwrap() > first.cancellation_date.unwrap());
    }

    #[tokio::test]
    async fn missing_ids_fail_with_distinct_contexts() {
        let svc = booking_service();
        let id = Uuid::new_v4();

        match svc.get(id).await {
            Err(CoreError::NotFound { context, id: got }) => {
                assert_eq!(context, BOOKING_NOT_FOUND);
                assert_eq!(got, id);
            }
            other => panic!("expected NotFound, got {:?}", other.map(|b| b.id)),
        }

        match svc.cancel(id).await {
            Err(CoreError::NotFound { context, .. }) => assert_eq!(context, BOOKING_NOT_FOUND),
            other => panic!("expected NotFound, got {:?}", other.map(|b| b.id)),
        }

        match svc.delete(id).await {
            Err(CoreError::NotFound { context, .. }) => {
                assert_eq!(context, BOOKING_MISSING_ON_DELETE)
            }
            other => panic!("expected NotFound, got {:?}", other.is_ok()),
        }
    }

    #[tokio::test]
    async fn delete_removes_from_either_state() {
        let svc = booking_service();

        let confirmed = svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
        svc.delete(confirmed.id).await.unwrap();
        assert!(svc.get(confirmed.id).await.is_err());

        let cancelled = svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
        svc.cancel(cancelled.id).await.unwrap();
        svc.delete(cancelled.id).await.unwrap();
        assert!(svc.get(cancelled.id).await.is_err());
    }

    #[tokio::test]
    async fn filtered_lookups_project_by_foreign_key() {
        let svc = booking_service();
        let member = Uuid::new_v4();
        let activity = Uuid::new_v4();

        let a = svc.create(member, activity).await.unwrap();
        let b = svc.create(member, Uuid::new_v4()).await.unwrap();
        svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();

        let by_member = svc.list_by_member(member).await.unwrap();
        assert_eq!(
            by_member.iter().map(|x| x.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );

        let by_activity = svc.list_by_activity(activity).await.unwrap();
        assert_eq!(by_activity.len(), 1);
        assert_eq!(by_activity[0].id, a.id);

        // Zero matches is an empty vec, never an error.
        assert!(svc.list_by_member(Uuid::new_v4()).await.unwrap().is_empty());
        assert!(svc
            .list_by_activity(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let svc = booking_service();
        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(svc.create(Uuid::new_v4(), Uuid::new_v4()).await.unwrap().id);
        }

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.iter().map(|b| b.id).collect::<Vec<_>>(), ids);
    }

    fn sample_activity() -> ActivityInput {
        ActivityInput {
            name: "Yoga".into(),
            description: "Morning yoga class".into(),
            coach: "Nadia".into(),
            max_capacity: 20,
            current_participants: None,
            start_time: chrono::Utc::now(),
            end_time: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn activity_create_defaults_participants_to_zero() {
        let svc = ActivityService::new(Arc::new(MemoryStore::new()));
        let activity = svc.create(sample_activity()).await.unwrap();
        assert_eq!(activity.current_participants, 0);
        assert_eq!(activity.max_capacity, 20);
    }

    #[tokio::test]
    async fn activity_update_keeps_participants_unless_supplied() {
        let svc = ActivityService::new(Arc::new(MemoryStore::new()));
        let created = svc
            .create(ActivityInput {
                current_participants: Some(7),
                ..sample_activity()
            })
            .await
            .unwrap();

        let updated = svc
            .update(
                created.id,
                ActivityInput {
                    name: "Pilates".into(),
                    ..sample_activity()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Pilates");
        assert_eq!(updated.current_participants, 7);
    }

    #[tokio::test]
    async fn member_update_never_touches_email_or_subscription() {
        let svc = MemberService::new(Arc::new(MemoryStore::new()));
        let created = svc
            .create(MemberInput {
                email: "lina@example.com".into(),
                first_name: "Lina".into(),
                last_name: "Moreau".into(),
                phone: "0601020304".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.subscription_status, SubscriptionStatus::Active);

        let updated = svc
            .update(
                created.id,
                MemberInput {
                    email: "other@example.com".into(),
                    first_name: "Lina".into(),
                    last_name: "Durand".into(),
                    phone: "0605060708".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "lina@example.com");
        assert_eq!(updated.last_name, "Durand");
        assert_eq!(updated.subscription_status, SubscriptionStatus::Active);
    }
}

use std::sync::Arc;

use sportscenter_core::activity::ActivityService;
use sportscenter_core::booking::BookingService;
use sportscenter_core::member::MemberService;
use sportscenter_store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingService,
    pub activities: ActivityService,
    pub members: MemberService,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            bookings: BookingService::new(store.clone()),
            activities: ActivityService::new(store.clone()),
            members: MemberService::new(store),
        }
    }
}

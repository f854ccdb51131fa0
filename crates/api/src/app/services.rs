use std::sync::Arc;

use campus_infra::{
    ClassroomService, Directory, InMemoryClassroomStore, InMemoryDirectory, InMemoryScheduler,
    ClassroomStore, ScheduleService,
};

/// Application services shared across request handlers.
pub struct AppServices {
    pub classrooms: ClassroomService,
}

impl AppServices {
    pub fn new(classrooms: ClassroomService) -> Self {
        Self { classrooms }
    }
}

/// Default wiring: in-memory collaborators.
///
/// Production deployments construct [`AppServices`] with real adapters for
/// the directory, the classroom store, and the scheduling service behind the
/// same port traits.
pub fn build_services() -> AppServices {
    let directory: Arc<dyn Directory> = Arc::new(InMemoryDirectory::new());
    let store: Arc<dyn ClassroomStore> = Arc::new(InMemoryClassroomStore::new());
    let scheduler: Arc<dyn ScheduleService> = Arc::new(InMemoryScheduler::new());

    AppServices::new(ClassroomService::new(directory, store, scheduler))
}

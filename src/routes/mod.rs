pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod feedback;
pub mod fees;
pub mod jobs;
pub mod users;

pub use announcements::configure_announcement_routes;
pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use feedback::configure_feedback_routes;
pub use fees::configure_fee_routes;
pub use jobs::configure_job_routes;
pub use users::configure_user_routes;

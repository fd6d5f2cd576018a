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

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use feedback::FeedbackService;
pub use fees::FeeService;
pub use jobs::JobPostingService;
pub use users::UserService;

pub use super::announcements::Entity as Announcements;
pub use super::assignments::Entity as Assignments;
pub use super::attendance_records::Entity as AttendanceRecords;
pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::fee_records::Entity as FeeRecords;
pub use super::feedback_entries::Entity as FeedbackEntries;
pub use super::feedback_settings::Entity as FeedbackSettings;
pub use super::job_postings::Entity as JobPostings;
pub use super::users::Entity as Users;

pub mod account_roles;
pub mod accounts;
pub mod diseases;
pub mod doctors;
pub mod options;
pub mod patient_comments;
pub mod patient_diseases;
pub mod patients;
pub mod questions;
pub mod quiz_results;
pub mod quizzes;
pub mod role_claims;
pub mod roles;
pub mod videos;

pub use account_roles::Entity as AccountRoles;
pub use accounts::Entity as Accounts;
pub use diseases::Entity as Diseases;
pub use doctors::Entity as Doctors;
pub use options::Entity as QuestionOptions;
pub use patient_comments::Entity as PatientComments;
pub use patient_diseases::Entity as PatientDiseases;
pub use patients::Entity as Patients;
pub use questions::Entity as Questions;
pub use quiz_results::Entity as QuizResults;
pub use quizzes::Entity as Quizzes;
pub use role_claims::Entity as RoleClaims;
pub use roles::Entity as Roles;
pub use videos::Entity as Videos;

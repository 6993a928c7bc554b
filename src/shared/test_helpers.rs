#[cfg(test)]
use fake::faker::internet::en::SafeEmail;
#[cfg(test)]
use fake::faker::name::en::Name;
#[cfg(test)]
use fake::Fake;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::assignments::models::{Professor, Student};
#[cfg(test)]
use crate::features::offers::models::Offer;

#[cfg(test)]
pub fn sample_student() -> Student {
    Student {
        id: Uuid::new_v4(),
        name: Name().fake(),
        email: SafeEmail().fake(),
        program: "genie-logiciel".to_string(),
        professor_id: None,
        assignment_id: None,
        notification_failed: false,
    }
}

#[cfg(test)]
pub fn sample_professor(available: bool) -> Professor {
    Professor {
        id: Uuid::new_v4(),
        name: Name().fake(),
        department: "Software Engineering".to_string(),
        available,
        assigned_students_count: 0,
    }
}

#[cfg(test)]
pub fn sample_offer(session: Option<&str>, start_year: Option<i32>) -> Offer {
    use chrono::TimeZone;

    Offer {
        id: Uuid::new_v4(),
        title: "Backend internship".to_string(),
        targeted_programme: "genie-logiciel".to_string(),
        session: session.map(String::from),
        start_date: start_year.map(|year| {
            chrono::Utc
                .with_ymd_and_hms(year, 1, 15, 0, 0, 0)
                .single()
                .expect("valid test date")
        }),
    }
}

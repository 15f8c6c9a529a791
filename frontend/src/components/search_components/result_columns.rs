//! Column model shared by the card and table views.

use common::{catalog_record::CatalogRecord, search_const::ContentType};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultColumn {
    CourseName,
    ProgramName,
    Partner,
    Price,
    Availability,
    NumCourses,
    ProgramType,
    Catalogs,
}

/// Base column set per content type. Hiding prices swaps the course price column
/// for the advertised run dates.
pub fn columns_for(content_type: ContentType, hide_price: bool) -> Vec<ResultColumn> {
    match content_type {
        ContentType::Course => vec![
            ResultColumn::CourseName,
            ResultColumn::Partner,
            if hide_price { ResultColumn::Availability } else { ResultColumn::Price },
            ResultColumn::Catalogs,
        ],
        ContentType::Program => vec![
            ResultColumn::ProgramName,
            ResultColumn::Partner,
            ResultColumn::NumCourses,
            ResultColumn::ProgramType,
            ResultColumn::Catalogs,
        ],
    }
}

impl ResultColumn {
    pub fn header(&self) -> &'static str {
        match self {
            ResultColumn::CourseName => "Course Name",
            ResultColumn::ProgramName => "Program Name",
            ResultColumn::Partner => "Partner",
            ResultColumn::Price => "Price",
            ResultColumn::Availability => "Availability",
            ResultColumn::NumCourses => "# Courses",
            ResultColumn::ProgramType => "Program Type",
            ResultColumn::Catalogs => "Catalogs",
        }
    }

    pub fn cell(&self, record: &CatalogRecord) -> Option<String> {
        match (self, record) {
            (ResultColumn::CourseName | ResultColumn::ProgramName, _) => record.title().map(|t| t.to_string()),
            (ResultColumn::Partner, _) => record.partner_name().map(|p| p.to_string()),
            (ResultColumn::Price, CatalogRecord::Course(course)) => course.price_display(),
            (ResultColumn::Availability, CatalogRecord::Course(course)) => course.availability_display(),
            (ResultColumn::NumCourses, CatalogRecord::Program(program)) => Some(program.course_count_display()),
            (ResultColumn::ProgramType, CatalogRecord::Program(program)) => program.program_type.clone(),
            (ResultColumn::Catalogs, _) => {
                let badges = record.memberships().badges();
                (!badges.is_empty()).then(|| badges.join(", "))
            }
            (ResultColumn::Price | ResultColumn::Availability, CatalogRecord::Program(_)) => None,
            (ResultColumn::NumCourses | ResultColumn::ProgramType, CatalogRecord::Course(_)) => None,
        }
    }
}

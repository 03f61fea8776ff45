//! Built-in seed tables. `data/*.json` ships the same content for
//! `DeskConfig::load`.

use crate::{
    directory::{DepartmentStaff, KeywordRoute, KeywordRoutes, StaffDirectory, StaffMember},
    identity::{Role, UserDirectory, UserRecord},
    issue::{Coordinates, Issue, IssueStatus, MediaAttachments, Priority},
};
use chrono::NaiveDate;

const SWM: &str = "Solid Waste Management Department";
const HEALTH: &str = "Health & Sanitation Department";
const WATER: &str = "Water Works Department";
const PWD: &str = "Public Works Department (PWD)";
const ELECTRICAL: &str = "Municipal Corporation Electrical Department";

pub fn staff_directory() -> StaffDirectory {
    let dept = |department: &str, staff: &[(&str, &str)]| DepartmentStaff {
        department: department.to_string(),
        staff: staff.iter().map(|(n, r)| StaffMember::new(*n, *r)).collect(),
    };
    StaffDirectory::new(vec![
        dept(SWM, &[
            ("Rohan Kale", "SWM Supervisor"),
            ("Meera Joshi", "Sanitation Lead"),
            ("Vikas Patil", "Collection In-charge"),
        ]),
        dept(HEALTH, &[
            ("Kavya Nair", "Sanitation Inspector"),
            ("Anil Sharma", "Hygiene Officer"),
        ]),
        dept(WATER, &[
            ("Mohit Deshmukh", "Pipeline Technician"),
            ("Priya Kulkarni", "Maintenance Engineer"),
        ]),
        dept(PWD, &[
            ("Suresh Pawar", "Road Repair Lead"),
            ("Neha Bhosale", "Civil Engineer"),
        ]),
        dept(ELECTRICAL, &[
            ("Rahul Gupta", "Electrical Supervisor"),
            ("Sneha Verma", "Streetlight Technician"),
        ]),
    ])
}

/// Order matters: "road" sits ahead of "streetlight".
pub fn keyword_routes() -> KeywordRoutes {
    let table: [(&str, &str); 10] = [
        ("garbage", SWM),
        ("dustbin", SWM),
        ("toilet", HEALTH),
        ("sanitize", HEALTH),
        ("leakage", WATER),
        ("water", WATER),
        ("pothole", PWD),
        ("road", PWD),
        ("streetlight", ELECTRICAL),
        ("light", ELECTRICAL),
    ];
    KeywordRoutes::new(
        table
            .iter()
            .map(|(kw, dept)| KeywordRoute {
                keyword:     kw.to_string(),
                departments: vec![dept.to_string()],
            })
            .collect(),
    )
}

pub fn users() -> UserDirectory {
    let user = |id: &str, name: &str, email: &str, dept: &str, role: Role, phone: &str, born: &str, addr: &str| {
        UserRecord {
            id:             id.into(),
            name:           name.into(),
            email:          email.into(),
            department:     dept.into(),
            role,
            contact_number: Some(phone.into()),
            birthdate:      Some(born.into()),
            address:        Some(addr.into()),
        }
    };
    UserDirectory::new(vec![
        user("1", "John Manager", "john@company.com", PWD, Role::Manager, "+91 9876543210", "1985-05-15", "Pune, Maharashtra"),
        user("2", "Sarah Admin", "sarah@company.com", SWM, Role::Manager, "+91 9876543211", "1987-08-22", "Mumbai, Maharashtra"),
        user("3", "Mike Employee", "mike@company.com", ELECTRICAL, Role::Employee, "+91 9876543212", "1992-03-10", "Pune, Maharashtra"),
        user("4", "Lisa Worker", "lisa@company.com", HEALTH, Role::Employee, "+91 9876543213", "1990-12-05", "Pune, Maharashtra"),
        user("5", "David Tech", "david@company.com", WATER, Role::Employee, "+91 9876543214", "1993-07-18", "Pune, Maharashtra"),
        user("6", "Anna Support", "anna@company.com", SWM, Role::Employee, "+91 9876543215", "1991-11-30", "Pune, Maharashtra"),
        user("7", "Tom Developer", "tom@company.com", PWD, Role::Employee, "+91 9876543216", "1994-02-14", "Pune, Maharashtra"),
    ])
}

struct SeedIssue {
    id:           &'static str,
    title:        &'static str,
    category:     &'static str,
    status:       IssueStatus,
    priority:     Priority,
    assigned_to:  &'static str,
    submitted_by: &'static str,
    description:  &'static str,
    location:     &'static str,
    reported_on:  (i32, u32, u32),
    coordinates:  (f64, f64),
}

impl SeedIssue {
    fn build(self) -> Issue {
        let (y, m, d) = self.reported_on;
        Issue {
            id:           self.id.into(),
            title:        self.title.into(),
            category:     self.category.into(),
            status:       self.status,
            priority:     self.priority,
            assigned_to:  self.assigned_to.into(),
            submitted_by: self.submitted_by.into(),
            description:  self.description.into(),
            location:     self.location.into(),
            reported_on:  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            coordinates:  Coordinates::new(self.coordinates.0, self.coordinates.1),
            media:        MediaAttachments {
                image: Some(format!("/images/{}.webp", self.id)),
                ..MediaAttachments::default()
            },
        }
    }
}

/// The ten reported issues the desk starts from.
pub fn issues() -> Vec<Issue> {
    use IssueStatus::{InProgress, Open};
    use Priority::{Critical, High, Low, Medium};

    vec![
        SeedIssue {
            id: "ISS-001",
            title: "Garbage overflow near community bin",
            category: SWM,
            status: Open,
            priority: High,
            assigned_to: "",
            submitted_by: "Resident - Prakash S",
            description: "Community dustbin at Kothrud Depot Road is overflowing with uncollected waste. Spillage attracting stray animals and foul smell reported since two days.",
            location: "Kothrud Depot Road",
            reported_on: (2025, 9, 22),
            coordinates: (18.5078, 73.8077),
        },
        SeedIssue {
            id: "ISS-002",
            title: "Public toilet requires deep cleaning",
            category: HEALTH,
            status: InProgress,
            priority: Medium,
            assigned_to: "Ward Sanitation Inspector",
            submitted_by: "Shop Owner - Kavita M",
            description: "Municipal toilet near Deccan bus stop has foul odor and wet floors. Cleaning schedule seems missed and consumables not replenished.",
            location: "Deccan Bus Stop",
            reported_on: (2025, 9, 21),
            coordinates: (18.5167, 73.8417),
        },
        SeedIssue {
            id: "ISS-003",
            title: "Water pipeline leakage on main road",
            category: WATER,
            status: Open,
            priority: Critical,
            assigned_to: "",
            submitted_by: "Citizen - Aditi P",
            description: "Continuous water seepage from underground line causing puddles and reduced pressure in nearby lanes. Potential road damage if not fixed urgently.",
            location: "FC Road - Near Gate No. 3",
            reported_on: (2025, 9, 23),
            coordinates: (18.5209, 73.8522),
        },
        SeedIssue {
            id: "ISS-004",
            title: "Potholes across intersection",
            category: PWD,
            status: InProgress,
            priority: High,
            assigned_to: "",
            submitted_by: "Auto Driver - Ramesh V",
            description: "Multiple deep potholes at the Senapati Bapat Road junction causing traffic slowdown and risk to two-wheelers. Requires patching and leveling.",
            location: "SB Road Junction",
            reported_on: (2025, 9, 20),
            coordinates: (18.5362, 73.8410),
        },
        SeedIssue {
            id: "ISS-005",
            title: "Streetlight not working for entire lane",
            category: ELECTRICAL,
            status: Open,
            priority: Medium,
            assigned_to: "Mike Employee",
            submitted_by: "Resident Welfare Assoc.",
            description: "Three consecutive streetlights are out from Lane 5 to Lane 7, creating dark stretch post 7 PM. Cabling suspected; poles numbered EL-23 to EL-25.",
            location: "Lane 5, Aundh",
            reported_on: (2025, 9, 18),
            coordinates: (18.5602, 73.8073),
        },
        SeedIssue {
            id: "ISS-006",
            title: "Overflowing bin near Shivajinagar Court",
            category: SWM,
            status: Open,
            priority: Medium,
            assigned_to: "",
            submitted_by: "Citizen - Manoj K",
            description: "Public bin adjacent to Shivajinagar Court is overflowing; litter on pavement attracting stray animals.",
            location: "Shivajinagar Court",
            reported_on: (2025, 9, 24),
            coordinates: (18.5312, 73.8476),
        },
        SeedIssue {
            id: "ISS-007",
            title: "Streetlight flickering near Baner Road junction",
            category: ELECTRICAL,
            status: Open,
            priority: Low,
            assigned_to: "Mike Employee",
            submitted_by: "Resident - Tanvi R",
            description: "One lamp post intermittently flickers at night near Baner Road junction causing poor visibility for vehicles.",
            location: "Baner Road Junction",
            reported_on: (2025, 9, 24),
            coordinates: (18.5586, 73.7897),
        },
        SeedIssue {
            id: "ISS-008",
            title: "Water leakage near Swargate bus depot",
            category: WATER,
            status: InProgress,
            priority: High,
            assigned_to: "",
            submitted_by: "Shopkeeper - Rafiq S",
            description: "Continuous seepage from roadside valve causing slippery patch and reduced pressure in nearby shops.",
            location: "Swargate Bus Depot",
            reported_on: (2025, 9, 23),
            coordinates: (18.5018, 73.8629),
        },
        SeedIssue {
            id: "ISS-009",
            title: "Public toilet cleaning required at Viman Nagar park",
            category: HEALTH,
            status: Open,
            priority: Medium,
            assigned_to: "",
            submitted_by: "Jogger - Nisha P",
            description: "Park restroom hasn't been cleaned; wet floors and no handwash. Request immediate sanitation visit.",
            location: "Viman Nagar Central Park",
            reported_on: (2025, 9, 25),
            coordinates: (18.5665, 73.9138),
        },
        SeedIssue {
            id: "ISS-010",
            title: "Potholes on lane behind Fatima Nagar market",
            category: PWD,
            status: Open,
            priority: High,
            assigned_to: "",
            submitted_by: "Delivery Rider - Omkar D",
            description: "Multiple potholes after recent rains; two-wheelers skidding reported. Needs patchwork and leveling.",
            location: "Fatima Nagar Market Lane",
            reported_on: (2025, 9, 25),
            coordinates: (18.5006, 73.9033),
        },
    ]
    .into_iter()
    .map(SeedIssue::build)
    .collect()
}

//! Simulated collections-floor data for the Dunlin reference runtime.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module acts as a stand-in for the agent directory and
//! the receivables book in a production deployment.

use dunlin_contracts::{
    agent::{Agent, AgentStatus, PerformanceTier},
    work_item::{Priority, WorkItem, WorkItemKind},
};

// ── Agent roster (mock) ───────────────────────────────────────────────────────

/// The reference collections floor: six agents with varied skills,
/// territories, tiers, and capacities.
///
/// - Priya Nair     — top tier, motor + HNI, Karnataka
/// - Marcus Webb    — high tier, health + corporate, Maharashtra
/// - Sofia Reyes    — average tier, motor + retail, Karnataka
/// - Dev Sharma     — average tier, no skills configured (universally
///                    qualified), Tamil Nadu
/// - Lena Fischer   — low tier, life insurance, Maharashtra
/// - Omar Haddad    — high tier, inactive (on leave), never routable
pub fn collections_floor() -> Vec<Agent> {
    vec![
        Agent {
            skills: vec!["motor_insurance".to_string(), "hni".to_string()],
            territories: vec!["Karnataka".to_string(), "Bengaluru".to_string()],
            tier: PerformanceTier::Top,
            capacity: 8,
            ..Agent::new("AGT-001", "Priya Nair")
        },
        Agent {
            skills: vec!["health_insurance".to_string(), "corporate".to_string()],
            territories: vec!["Maharashtra".to_string(), "Mumbai".to_string()],
            tier: PerformanceTier::High,
            capacity: 8,
            ..Agent::new("AGT-002", "Marcus Webb")
        },
        Agent {
            skills: vec!["motor_insurance".to_string(), "retail".to_string()],
            territories: vec!["Karnataka".to_string()],
            capacity: 6,
            ..Agent::new("AGT-003", "Sofia Reyes")
        },
        Agent {
            territories: vec!["Tamil Nadu".to_string(), "Chennai".to_string()],
            capacity: 6,
            ..Agent::new("AGT-004", "Dev Sharma")
        },
        Agent {
            skills: vec!["life_insurance".to_string()],
            territories: vec!["Maharashtra".to_string()],
            tier: PerformanceTier::Low,
            capacity: 4,
            ..Agent::new("AGT-005", "Lena Fischer")
        },
        Agent {
            active: false,
            status: AgentStatus::Inactive,
            skills: vec!["motor_insurance".to_string()],
            tier: PerformanceTier::High,
            ..Agent::new("AGT-006", "Omar Haddad")
        },
    ]
}

// ── Open receivables book (mock) ──────────────────────────────────────────────

/// Items already on the floor, some assigned, forming the workload backdrop
/// every scenario routes against.
pub fn open_portfolio() -> Vec<WorkItem> {
    vec![
        WorkItem {
            status: "In Progress".to_string(),
            priority: Priority::Urgent,
            value: Some(450_000.0),
            product: Some("Motor".to_string()),
            assigned_to: Some("AGT-001".to_string()),
            ..WorkItem::new("CASE-1001", WorkItemKind::Case)
        },
        WorkItem {
            status: "Contacted".to_string(),
            priority: Priority::High,
            value: Some(1_250_000.0),
            product: Some("Health".to_string()),
            assigned_to: Some("AGT-002".to_string()),
            ..WorkItem::new("CASE-1002", WorkItemKind::Case)
        },
        WorkItem {
            status: "Promise To Pay".to_string(),
            priority: Priority::Medium,
            value: Some(85_000.0),
            // Owner reference by display name; workload matching accepts both.
            assigned_to: Some("Sofia Reyes".to_string()),
            ..WorkItem::new("CASE-1003", WorkItemKind::Case)
        },
        WorkItem {
            status: "Closed Won".to_string(),
            priority: Priority::High,
            value: Some(300_000.0),
            assigned_to: Some("AGT-001".to_string()),
            ..WorkItem::new("CASE-1004", WorkItemKind::Case)
        },
    ]
}

// ── Intake batch (mock) ───────────────────────────────────────────────────────

/// A morning's unassigned intake: five items spanning every routing signal.
pub fn intake_batch() -> Vec<WorkItem> {
    vec![
        WorkItem {
            priority: Priority::High,
            value: Some(2_400_000.0),
            score: Some(91.0),
            product: Some("Motor".to_string()),
            category: Some("Renewal".to_string()),
            state: Some("Karnataka".to_string()),
            city: Some("Bengaluru".to_string()),
            ..WorkItem::new("LEAD-2001", WorkItemKind::Lead)
        },
        WorkItem {
            priority: Priority::Medium,
            value: Some(120_000.0),
            score: Some(55.0),
            product: Some("Health".to_string()),
            company_size: Some(340),
            address: Some("Tower B, Bandra Kurla Complex, Mumbai, Maharashtra".to_string()),
            ..WorkItem::new("CASE-2002", WorkItemKind::Case)
        },
        WorkItem {
            priority: Priority::Urgent,
            value: Some(67_000.0),
            score: Some(72.0),
            product: Some("Motor".to_string()),
            company_size: Some(9),
            state: Some("Karnataka".to_string()),
            ..WorkItem::new("CASE-2003", WorkItemKind::Case)
        },
        WorkItem {
            priority: Priority::Low,
            score: Some(38.0),
            ..WorkItem::new("EMAIL-2004", WorkItemKind::Email)
        },
        WorkItem {
            priority: Priority::Medium,
            value: Some(540_000.0),
            product: Some("Life".to_string()),
            state: Some("Maharashtra".to_string()),
            ..WorkItem::new("CLAIM-2005", WorkItemKind::Claim)
        },
    ]
}

//! Well-known platform-standard object names
//!
//! Objects on this list pre-exist on every org and are never migrated.
//! The list is static data; orgs with extra built-ins extend it through
//! [`ResolverConfig::extra_standard_objects`](crate::ResolverConfig).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Built-in object names
pub static STANDARD_OBJECTS: &[&str] = &[
    "Account",
    "AccountContactRelation",
    "Asset",
    "AssetRelationship",
    "Attachment",
    "Campaign",
    "CampaignMember",
    "Case",
    "CaseComment",
    "Contact",
    "ContentDocument",
    "ContentDocumentLink",
    "ContentVersion",
    "Contract",
    "ContractLineItem",
    "Document",
    "EmailMessage",
    "Entitlement",
    "Event",
    "FeedItem",
    "Group",
    "Individual",
    "Lead",
    "Location",
    "Note",
    "Opportunity",
    "OpportunityContactRole",
    "OpportunityLineItem",
    "Order",
    "OrderItem",
    "Organization",
    "PermissionSet",
    "Pricebook2",
    "PricebookEntry",
    "Product2",
    "Profile",
    "Quote",
    "QuoteLineItem",
    "RecordType",
    "ServiceAppointment",
    "ServiceContract",
    "Solution",
    "Task",
    "Territory",
    "User",
    "UserRole",
    "WorkOrder",
    "WorkOrderLineItem",
];

static STANDARD_OBJECT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STANDARD_OBJECTS.iter().copied().collect());

/// Check if `name` is a built-in object name
#[inline]
#[must_use]
pub fn is_well_known_object(name: &str) -> bool {
    STANDARD_OBJECT_SET.contains(name)
}

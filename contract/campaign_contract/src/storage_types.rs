use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    TotalContributed,
    Ended,
    Released,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Address),
}

/// Parameters fixed once at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub creator: Address,
    pub token: Address,
    pub goal_amount: i128,
    pub min_donation: i128,
    pub max_donation: i128,
    pub end_date: u64,
    pub currency: String, // Opaque label, never interpreted
    pub cap_at_goal: bool, // Reject donations that would overshoot the goal
}

// Read-only projection of the campaign flags
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Ended,
    Successful,
    Released,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    OutOfRange = 4,
    CampaignEnded = 5,
    NotEnded = 6,
    AlreadyEnded = 7,
    DeadlineNotReached = 8,
    GoalMet = 9,
    GoalNotMet = 10,
    NoFundsToRelease = 11,
    NothingToRefund = 12,
    Unauthorized = 13,
    Overflow = 14,
}

impl CampaignError {
    /// Stable human-readable reason for the error code.
    pub fn reason(&self) -> &'static str {
        match self {
            CampaignError::AlreadyInitialized => "Campaign already initialized",
            CampaignError::NotInitialized => "Campaign not initialized",
            CampaignError::InvalidConfig => "Invalid campaign parameters",
            CampaignError::OutOfRange => "Donation out of range",
            CampaignError::CampaignEnded => "Campaign has ended",
            CampaignError::NotEnded => "Campaign must be ended for refunds",
            CampaignError::AlreadyEnded => "Campaign already ended",
            CampaignError::DeadlineNotReached => "Campaign end date not reached",
            CampaignError::GoalMet => "Goal met, no refunds available",
            CampaignError::GoalNotMet => "Goal not met",
            CampaignError::NoFundsToRelease => "No funds to release",
            CampaignError::NothingToRefund => "Nothing to refund",
            CampaignError::Unauthorized => "Only the creator can release funds",
            CampaignError::Overflow => "Contribution total overflow",
        }
    }
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignInitializedEvent {
    pub creator: Address,
    pub goal_amount: i128,
    pub end_date: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationReceivedEvent {
    pub donor: Address,
    pub amount: i128,
    pub label: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignEndedEvent {
    pub total_contributed: i128,
    pub goal_met: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundIssuedEvent {
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsReleasedEvent {
    pub amount: i128,
}

pub fn emit_campaign_initialized(env: &Env, event: CampaignInitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_initialized"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_ended"),), event);
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events()
        .publish((Symbol::new(env, "refund_issued"),), event);
}

pub fn emit_funds_released(env: &Env, event: FundsReleasedEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_released"),), event);
}

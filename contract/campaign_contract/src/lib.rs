#![no_std]


mod events;
mod storage_types;

pub use storage_types::{CampaignConfig, CampaignError, CampaignStatus};
use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Create the campaign. Parameters are immutable afterwards.
    pub fn initialize(
        e: Env,
        creator: Address,
        token: Address,
        goal_amount: i128,
        min_donation: i128,
        max_donation: i128,
        end_date: u64,
        currency: String,
        cap_at_goal: bool,
    ) -> Result<(), CampaignError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(CampaignError::AlreadyInitialized);
        }
        creator.require_auth();

        if goal_amount <= 0
            || min_donation <= 0
            || min_donation > max_donation
            || end_date <= e.ledger().timestamp()
        {
            return Err(CampaignError::InvalidConfig);
        }

        let config = CampaignConfig {
            creator: creator.clone(),
            token,
            goal_amount,
            min_donation,
            max_donation,
            end_date,
            currency,
            cap_at_goal,
        };

        e.storage().instance().set(&DataKey::Config, &config);
        e.storage()
            .instance()
            .set(&DataKey::TotalContributed, &0i128);
        e.storage().instance().set(&DataKey::Ended, &false);
        e.storage().instance().set(&DataKey::Released, &false);
        extend_instance(&e);

        events::emit_campaign_initialized(
            &e,
            events::CampaignInitializedEvent {
                creator,
                goal_amount,
                end_date,
            },
        );

        Ok(())
    }

    /// Contribute `amount` of the campaign token on behalf of `donor`.
    ///
    /// Bounds apply to this single call, not to the donor's running total.
    /// `label` is carried into the event untouched.
    pub fn donate(
        e: Env,
        donor: Address,
        amount: i128,
        label: String,
    ) -> Result<(), CampaignError> {
        let config = load_config(&e)?;
        donor.require_auth();

        if read_ended(&e) || read_released(&e) {
            return Err(CampaignError::CampaignEnded);
        }

        if amount < config.min_donation || amount > config.max_donation {
            return Err(CampaignError::OutOfRange);
        }

        let total = read_total(&e);
        let new_total = total.checked_add(amount).ok_or(CampaignError::Overflow)?;
        if config.cap_at_goal && new_total > config.goal_amount {
            return Err(CampaignError::OutOfRange);
        }

        let key = PersistentKey::Contribution(donor.clone());
        let previous = read_contribution(&e, &donor);
        let updated = previous.checked_add(amount).ok_or(CampaignError::Overflow)?;

        e.storage().persistent().set(&key, &updated);
        extend_persistent(&e, &key);
        e.storage()
            .instance()
            .set(&DataKey::TotalContributed, &new_total);
        extend_instance(&e);

        // A failed pull panics and reverts the bookkeeping above
        let token_client = token::Client::new(&e, &config.token);
        let contract_address = e.current_contract_address();
        token_client.transfer(&donor, &contract_address, &amount);

        log!(&e, "donation accepted", donor, amount, new_total);

        events::emit_donation_received(
            &e,
            events::DonationReceivedEvent {
                donor,
                amount,
                label,
            },
        );

        Ok(())
    }

    /// Mark the campaign as ended once the deadline has passed.
    pub fn end_campaign(e: Env) -> Result<(), CampaignError> {
        let config = load_config(&e)?;

        if read_ended(&e) {
            return Err(CampaignError::AlreadyEnded);
        }
        if e.ledger().timestamp() < config.end_date {
            return Err(CampaignError::DeadlineNotReached);
        }

        e.storage().instance().set(&DataKey::Ended, &true);
        extend_instance(&e);

        let total = read_total(&e);
        log!(&e, "campaign ended", total);

        events::emit_campaign_ended(
            &e,
            events::CampaignEndedEvent {
                total_contributed: total,
                goal_met: total >= config.goal_amount,
            },
        );

        Ok(())
    }

    /// Return the caller's whole contribution after a failed campaign.
    pub fn refund(e: Env, donor: Address) -> Result<i128, CampaignError> {
        let config = load_config(&e)?;
        donor.require_auth();

        let total = read_total(&e);
        if total >= config.goal_amount {
            return Err(CampaignError::GoalMet);
        }
        if !read_ended(&e) {
            return Err(CampaignError::NotEnded);
        }

        let amount = read_contribution(&e, &donor);
        if amount <= 0 {
            return Err(CampaignError::NothingToRefund);
        }

        // Zero the ledger entry before the outbound transfer
        let key = PersistentKey::Contribution(donor.clone());
        e.storage().persistent().set(&key, &0i128);
        extend_persistent(&e, &key);
        e.storage()
            .instance()
            .set(&DataKey::TotalContributed, &(total - amount));
        extend_instance(&e);

        let token_client = token::Client::new(&e, &config.token);
        let contract_address = e.current_contract_address();
        token_client.transfer(&contract_address, &donor, &amount);

        log!(&e, "refund issued", donor, amount);

        events::emit_refund_issued(&e, events::RefundIssuedEvent { donor, amount });

        Ok(amount)
    }

    /// Send the whole escrow balance to the creator once the goal is met.
    ///
    /// Not gated on the deadline: a fully funded campaign can be settled early.
    pub fn release_funds(e: Env, caller: Address) -> Result<i128, CampaignError> {
        let config = load_config(&e)?;
        caller.require_auth();

        if caller != config.creator {
            return Err(CampaignError::Unauthorized);
        }
        if read_total(&e) < config.goal_amount {
            return Err(CampaignError::GoalNotMet);
        }
        if read_released(&e) {
            return Err(CampaignError::NoFundsToRelease);
        }

        e.storage().instance().set(&DataKey::Released, &true);
        extend_instance(&e);

        let token_client = token::Client::new(&e, &config.token);
        let contract_address = e.current_contract_address();
        let amount = token_client.balance(&contract_address);
        if amount > 0 {
            token_client.transfer(&contract_address, &config.creator, &amount);
        }

        log!(&e, "funds released", config.creator, amount);

        events::emit_funds_released(&e, events::FundsReleasedEvent { amount });

        Ok(amount)
    }

    // View functions
    pub fn config(e: Env) -> Result<CampaignConfig, CampaignError> {
        load_config(&e)
    }

    pub fn creator(e: Env) -> Result<Address, CampaignError> {
        Ok(load_config(&e)?.creator)
    }

    pub fn token_address(e: Env) -> Result<Address, CampaignError> {
        Ok(load_config(&e)?.token)
    }

    pub fn goal_amount(e: Env) -> Result<i128, CampaignError> {
        Ok(load_config(&e)?.goal_amount)
    }

    pub fn min_donation(e: Env) -> Result<i128, CampaignError> {
        Ok(load_config(&e)?.min_donation)
    }

    pub fn max_donation(e: Env) -> Result<i128, CampaignError> {
        Ok(load_config(&e)?.max_donation)
    }

    pub fn end_date(e: Env) -> Result<u64, CampaignError> {
        Ok(load_config(&e)?.end_date)
    }

    pub fn currency(e: Env) -> Result<String, CampaignError> {
        Ok(load_config(&e)?.currency)
    }

    pub fn total_contributed(e: Env) -> Result<i128, CampaignError> {
        load_config(&e)?;
        Ok(read_total(&e))
    }

    pub fn contribution(e: Env, donor: Address) -> Result<i128, CampaignError> {
        load_config(&e)?;
        Ok(read_contribution(&e, &donor))
    }

    pub fn is_campaign_ended(e: Env) -> Result<bool, CampaignError> {
        load_config(&e)?;
        Ok(read_ended(&e))
    }

    pub fn is_released(e: Env) -> Result<bool, CampaignError> {
        load_config(&e)?;
        Ok(read_released(&e))
    }

    /// Token balance currently held in escrow.
    pub fn balance(e: Env) -> Result<i128, CampaignError> {
        let config = load_config(&e)?;
        let token_client = token::Client::new(&e, &config.token);
        Ok(token_client.balance(&e.current_contract_address()))
    }

    pub fn status(e: Env) -> Result<CampaignStatus, CampaignError> {
        let config = load_config(&e)?;
        let status = if read_released(&e) {
            CampaignStatus::Released
        } else if read_total(&e) >= config.goal_amount {
            CampaignStatus::Successful
        } else if read_ended(&e) {
            CampaignStatus::Ended
        } else {
            CampaignStatus::Active
        };
        Ok(status)
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn load_config(e: &Env) -> Result<CampaignConfig, CampaignError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CampaignError::NotInitialized)
}

fn read_total(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalContributed)
        .unwrap_or(0)
}

fn read_contribution(e: &Env, donor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(donor.clone()))
        .unwrap_or(0)
}

fn read_ended(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Ended).unwrap_or(false)
}

fn read_released(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Released)
        .unwrap_or(false)
}

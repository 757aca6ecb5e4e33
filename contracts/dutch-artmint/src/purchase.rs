use crate::*;

impl Contract {
    // Validates the purchase, computes price and splits, and persists every
    // state mutation before the external mint call is issued. The per-project
    // lock is held from here until `finish_purchase` runs.
    pub(crate) fn prepare_purchase(
        &mut self,
        buyer_id: &AccountId,
        contract_id: AccountId,
        project_id: u64,
        deposit: u128,
    ) -> Result<PendingPurchase, MinterError> {
        let key = project_key(contract_id.as_str(), project_id);
        if !self.bound_projects.contains(&key) {
            return Err(MinterError::not_bound(&key));
        }
        if self.purchase_locks.contains(&key) {
            return Err(MinterError::OperationInProgress(format!(
                "A purchase for {} is already settling",
                key
            )));
        }

        let price = self.price_for(&key, None)?;
        if deposit < price {
            return Err(MinterError::PriceNotMet(format!(
                "Current price is {}, offered {}",
                price, deposit
            )));
        }
        let splits = self.splits_for(&key, price)?;

        self.purchase_locks.insert(key.clone());
        let count = self.purchase_counts.get(&key).copied().unwrap_or(0);
        self.purchase_counts.insert(key, count + 1);

        Ok(PendingPurchase {
            contract_id,
            project_id,
            buyer_id: buyer_id.clone(),
            deposit: U128(deposit),
            price: U128(price),
            splits: splits
                .into_iter()
                .map(|(recipient, amount)| (recipient, U128(amount)))
                .collect(),
        })
    }

    // Settlement: on success distribute the splits and refund the excess; on
    // failure roll back the counter and refund everything. The lock is
    // released on both paths.
    pub(crate) fn finish_purchase(
        &mut self,
        pending: PendingPurchase,
        minted_token: Option<String>,
    ) -> Option<String> {
        let key = project_key(pending.contract_id.as_str(), pending.project_id);
        self.purchase_locks.remove(&key);

        match minted_token {
            Some(token_id) => {
                for (recipient, amount) in &pending.splits {
                    let _ = Promise::new(recipient.clone())
                        .transfer(NearToken::from_yoctonear(amount.0));
                }
                refund_excess(&pending.buyer_id, pending.deposit.0, pending.price.0);

                MinterEvent::PurchaseCompleted {
                    contract_id: pending.contract_id,
                    project_id: pending.project_id,
                    buyer_id: pending.buyer_id,
                    token_id: token_id.clone(),
                    price: pending.price,
                    purchase_count: self.purchase_counts.get(&key).copied().unwrap_or(0),
                }
                .emit();
                Some(token_id)
            }
            None => {
                let count = self.purchase_counts.get(&key).copied().unwrap_or(0);
                if count <= 1 {
                    self.purchase_counts.remove(&key);
                } else {
                    self.purchase_counts.insert(key, count - 1);
                }
                let _ = Promise::new(pending.buyer_id.clone())
                    .transfer(NearToken::from_yoctonear(pending.deposit.0));

                MinterEvent::PurchaseFailed {
                    contract_id: pending.contract_id,
                    project_id: pending.project_id,
                    buyer_id: pending.buyer_id,
                    refunded: pending.deposit,
                    error: MinterError::PaymentFailed(
                        "Token issuance was rejected by the issuing contract".into(),
                    )
                    .to_string(),
                }
                .emit();
                None
            }
        }
    }
}

pub(crate) fn refund_excess(buyer_id: &AccountId, deposit: u128, price: u128) {
    let refund = deposit.saturating_sub(price);
    if refund > 0 {
        let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(refund));
    }
}

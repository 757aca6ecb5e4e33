use crate::*;

impl Contract {
    // Binding hooks mirror the filter's assignments locally so purchases can
    // check authorization without a cross-contract round trip. Only the
    // configured filter account may drive them; both hooks are idempotent.
    pub(crate) fn record_binding(
        &mut self,
        caller_id: &AccountId,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), MinterError> {
        self.check_filter(caller_id)?;
        let key = project_key(contract_id.as_str(), project_id);
        if self.bound_projects.insert(key) {
            MinterEvent::ProjectBound {
                contract_id,
                project_id,
            }
            .emit();
        }
        Ok(())
    }

    pub(crate) fn clear_binding(
        &mut self,
        caller_id: &AccountId,
        contract_id: AccountId,
        project_id: u64,
    ) -> Result<(), MinterError> {
        self.check_filter(caller_id)?;
        let key = project_key(contract_id.as_str(), project_id);
        if self.bound_projects.remove(&key) {
            MinterEvent::ProjectUnbound {
                contract_id,
                project_id,
            }
            .emit();
        }
        Ok(())
    }

    fn check_filter(&self, caller_id: &AccountId) -> Result<(), MinterError> {
        if caller_id != &self.filter_id {
            return Err(MinterError::Unauthorized(
                "Only the minter filter can drive binding hooks".into(),
            ));
        }
        Ok(())
    }
}

//! Mission service: the entry point callers use for mission data.
//!
//! [`MissionService`] wraps the repositories with logging and adds the
//! caller-side workflow on top of them: keeping a single draft per customer,
//! composing the draft's manifest, forming it, and moderation.
//!
//! The repositories themselves accept any status change; the workflow
//! operations here refuse moves that [`MissionStatus::can_transition_to`]
//! does not allow.

use chrono::Utc;
use log::{debug, info, warn};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::entities::{mission, module, MissionStatus};
use crate::error::{MissionError, Result};
use crate::repositories::{CustomerRepository, MissionDetails, MissionFilter, MissionRepository};
use crate::storage::Storage;

/// Service exposing mission operations over a [`Storage`].
///
/// # Example
/// ```rust,no_run
/// use missions::repositories::{MissionFilter, StatusFilter};
/// use missions::service::MissionService;
/// use missions::storage::Storage;
/// use missions::entities::MissionStatus;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = MissionService::new(Storage::in_memory().await?);
///
/// let filter = MissionFilter::default().status(StatusFilter::Exact(MissionStatus::Formed));
/// for details in service.list_missions(&filter).await? {
///     println!("{} {}", details.mission.uuid, details.mission.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MissionService {
    storage: Storage,
}

impl MissionService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Lists formed and moderated missions matching `filter`.
    pub async fn list_missions(&self, filter: &MissionFilter) -> Result<Vec<MissionDetails>> {
        let missions = MissionRepository::list(&self.storage.conn, filter).await?;
        debug!("Listed {} missions for {:?}", missions.len(), filter);
        Ok(missions)
    }

    /// Returns the customer's draft, if any.
    pub async fn get_draft(&self, customer_id: &Uuid) -> Result<Option<mission::Model>> {
        MissionRepository::get_draft(&self.storage.conn, customer_id).await
    }

    /// Inserts a new draft without looking for an existing one.
    ///
    /// Prefer [`MissionService::get_or_create_draft`] unless the caller has
    /// already checked [`MissionService::get_draft`].
    pub async fn create_draft(&self, customer_id: &Uuid) -> Result<mission::Model> {
        let draft = MissionRepository::create_draft(&self.storage.conn, customer_id).await?;
        info!("Created draft mission {} for customer {}", draft.uuid, customer_id);
        Ok(draft)
    }

    /// Looks up a non-deleted mission, optionally restricted to its owner.
    pub async fn get_mission(&self, mission_id: &Uuid, user_id: Option<&Uuid>) -> Result<Option<MissionDetails>> {
        MissionRepository::get_by_id(&self.storage.conn, mission_id, user_id).await
    }

    /// Returns the modules on the mission's manifest.
    pub async fn get_flight_modules(&self, mission_id: &Uuid) -> Result<Vec<module::Model>> {
        MissionRepository::get_flight_modules(&self.storage.conn, mission_id).await
    }

    /// Overwrites the stored mission with `mission`. No transition check is made.
    pub async fn save_mission(&self, mission: &mission::Model) -> Result<()> {
        MissionRepository::save(&self.storage.conn, mission).await?;
        info!("Saved mission {} with status {}", mission.uuid, mission.status);
        Ok(())
    }

    /// Detaches a module. Detaching a module that is not attached succeeds.
    pub async fn remove_module(&self, mission_id: &Uuid, module_id: &Uuid) -> Result<()> {
        let removed = MissionRepository::remove_module(&self.storage.conn, mission_id, module_id).await?;
        if removed == 0 {
            debug!("Module {} was not attached to mission {}", module_id, mission_id);
        } else {
            info!("Removed module {} from mission {}", module_id, mission_id);
        }
        Ok(())
    }

    /// Counts the modules on the mission's manifest.
    pub async fn count_modules(&self, mission_id: &Uuid) -> Result<u64> {
        MissionRepository::count_modules(&self.storage.conn, mission_id).await
    }

    /// Returns the customer's draft, creating it inside the same transaction if missing.
    ///
    /// # Errors
    /// Returns [`MissionError::Storage`] if the lookup or the insert fails.
    pub async fn get_or_create_draft(&self, customer_id: &Uuid) -> Result<mission::Model> {
        let txn = self.storage.conn.begin().await?;

        let draft = match MissionRepository::get_draft(&txn, customer_id).await? {
            Some(draft) => draft,
            None => {
                let draft = MissionRepository::create_draft(&txn, customer_id).await?;
                info!("Created draft mission {} for customer {}", draft.uuid, customer_id);
                draft
            }
        };

        txn.commit().await?;
        Ok(draft)
    }

    /// Adds a module to the customer's draft, creating the draft if needed.
    ///
    /// # Returns
    /// The draft the module was attached to
    pub async fn add_module(&self, customer_id: &Uuid, module_id: &Uuid) -> Result<mission::Model> {
        let txn = self.storage.conn.begin().await?;

        let draft = match MissionRepository::get_draft(&txn, customer_id).await? {
            Some(draft) => draft,
            None => MissionRepository::create_draft(&txn, customer_id).await?,
        };
        MissionRepository::add_module(&txn, &draft.uuid, module_id).await?;

        txn.commit().await?;
        info!("Added module {} to mission {}", module_id, draft.uuid);
        Ok(draft)
    }

    /// Submits a customer's draft for moderation.
    ///
    /// # Errors
    /// - [`MissionError::NotFound`] if the mission does not exist or belongs to someone else
    /// - [`MissionError::InvalidTransition`] if the mission is not a draft
    /// - [`MissionError::EmptyManifest`] if no module is attached
    pub async fn form_mission(&self, mission_id: &Uuid, customer_id: &Uuid) -> Result<mission::Model> {
        let mut mission = self.require_mission(mission_id, Some(customer_id)).await?;
        Self::check_transition(&mission, MissionStatus::Formed)?;

        if self.count_modules(mission_id).await? == 0 {
            return Err(MissionError::EmptyManifest(*mission_id));
        }

        mission.form(Utc::now());
        self.save_mission(&mission).await?;
        Ok(mission)
    }

    /// Completes (`approve`) or rejects a formed mission on behalf of a moderator.
    ///
    /// # Errors
    /// - [`MissionError::NotModerator`] if `moderator_id` lacks the moderator role
    /// - [`MissionError::NotFound`] if the mission does not exist
    /// - [`MissionError::InvalidTransition`] if the mission is not formed
    pub async fn moderate_mission(&self, mission_id: &Uuid, moderator_id: &Uuid, approve: bool) -> Result<mission::Model> {
        let is_moderator = CustomerRepository::get_by_id(&self.storage.conn, moderator_id)
            .await?
            .is_some_and(|customer| customer.is_moderator);
        if !is_moderator {
            warn!("Customer {} tried to moderate mission {}", moderator_id, mission_id);
            return Err(MissionError::NotModerator(*moderator_id));
        }

        let mut mission = self.require_mission(mission_id, None).await?;
        let next = if approve {
            MissionStatus::Completed
        } else {
            MissionStatus::Rejected
        };
        Self::check_transition(&mission, next)?;

        mission.moderate(*moderator_id, approve, Utc::now());
        self.save_mission(&mission).await?;
        Ok(mission)
    }

    /// Soft-deletes a customer's draft.
    pub async fn delete_mission(&self, mission_id: &Uuid, customer_id: &Uuid) -> Result<mission::Model> {
        let mut mission = self.require_mission(mission_id, Some(customer_id)).await?;
        Self::check_transition(&mission, MissionStatus::Deleted)?;

        mission.soft_delete();
        self.save_mission(&mission).await?;
        Ok(mission)
    }

    async fn require_mission(&self, mission_id: &Uuid, user_id: Option<&Uuid>) -> Result<mission::Model> {
        self.get_mission(mission_id, user_id)
            .await?
            .map(|details| details.mission)
            .ok_or(MissionError::NotFound(*mission_id))
    }

    fn check_transition(mission: &mission::Model, next: MissionStatus) -> Result<()> {
        if mission.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(MissionError::InvalidTransition {
                from: mission.status,
                to: next,
            })
        }
    }
}

//! In-memory guild implementing `DiscordGateway` for service tests.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::{
    discord::DiscordGateway,
    error::AppError,
    model::discord::{LiveRole, RoleSpec, SelfRolePicker},
};

/// A single guild with roles, members and channels.
///
/// Role positions follow Discord's behaviour: moving one role shifts the roles in
/// between so positions stay contiguous.
#[derive(Default)]
pub struct FakeGateway {
    state: Mutex<FakeState>,
}

#[derive(Default)]
pub struct FakeState {
    pub roles: Vec<LiveRole>,
    pub members: HashMap<u64, HashSet<u64>>,
    /// Messages per channel, oldest first.
    pub messages: HashMap<u64, Vec<u64>>,
    pub pickers: Vec<(u64, u64, SelfRolePicker)>,
    /// Every `set_role_position` call in order.
    pub position_calls: Vec<(u64, u16)>,
    /// Role ids whose member grant or revoke fails.
    pub failing_member_roles: HashSet<u64>,
    next_id: u64,
}

impl FakeGateway {
    /// Creates a guild whose roles are listed from the bottom up.
    ///
    /// Role `i` of the slice gets position `i`, so the first entry plays @everyone.
    pub fn with_roles(roles: &[(u64, &str)]) -> Self {
        let gateway = Self::default();
        {
            let mut state = gateway.state.lock().unwrap();
            state.roles = roles
                .iter()
                .enumerate()
                .map(|(position, (id, name))| LiveRole {
                    id: *id,
                    name: name.to_string(),
                    position: position as u16,
                    colour: 0,
                })
                .collect();
            state.next_id = 1_000_000;
        }
        gateway
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn set_member_roles(&self, user_id: u64, roles: &[u64]) {
        self.state()
            .members
            .insert(user_id, roles.iter().copied().collect());
    }

    pub fn member(&self, user_id: u64) -> HashSet<u64> {
        self.state()
            .members
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Live role ids from the top of the hierarchy down.
    pub fn role_ids_top_down(&self) -> Vec<u64> {
        let mut roles = self.state().roles.clone();
        roles.sort_by(|a, b| b.position.cmp(&a.position));
        roles.into_iter().map(|r| r.id).collect()
    }

    pub fn role(&self, role_id: u64) -> Option<LiveRole> {
        self.state().roles.iter().find(|r| r.id == role_id).cloned()
    }

    pub fn fail_member_role(&self, role_id: u64) {
        self.state().failing_member_roles.insert(role_id);
    }

    pub fn add_messages(&self, channel_id: u64, message_ids: &[u64]) {
        self.state()
            .messages
            .entry(channel_id)
            .or_default()
            .extend_from_slice(message_ids);
    }
}

fn failure(reason: &'static str) -> AppError {
    AppError::from(serenity::Error::Other(reason))
}

impl FakeState {
    fn renumber(&mut self) {
        for (position, role) in self.roles.iter_mut().enumerate() {
            role.position = position as u16;
        }
    }

    fn sort_bottom_up(&mut self) {
        self.roles.sort_by(|a, b| a.position.cmp(&b.position));
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[serenity::async_trait]
impl DiscordGateway for FakeGateway {
    async fn guild_roles(&self, _guild_id: u64) -> Result<Vec<LiveRole>, AppError> {
        Ok(self.state().roles.clone())
    }

    async fn create_role(&self, _guild_id: u64, spec: RoleSpec) -> Result<u64, AppError> {
        let mut state = self.state();
        let id = state.next_id();

        // New roles appear directly above @everyone
        state.sort_bottom_up();
        let index = state.roles.len().min(1);
        state.roles.insert(
            index,
            LiveRole {
                id,
                name: spec.name,
                position: 0,
                colour: spec.colour.unwrap_or(0),
            },
        );
        state.renumber();

        Ok(id)
    }

    async fn edit_role(
        &self,
        _guild_id: u64,
        role_id: u64,
        spec: RoleSpec,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        let role = state
            .roles
            .iter_mut()
            .find(|r| r.id == role_id)
            .ok_or_else(|| failure("Unknown Role"))?;

        role.name = spec.name;
        if let Some(colour) = spec.colour {
            role.colour = colour;
        }

        Ok(())
    }

    async fn delete_role(&self, _guild_id: u64, role_id: u64) -> Result<(), AppError> {
        let mut state = self.state();
        let before = state.roles.len();

        state.sort_bottom_up();
        state.roles.retain(|r| r.id != role_id);
        if state.roles.len() == before {
            return Err(failure("Unknown Role"));
        }
        state.renumber();

        for roles in state.members.values_mut() {
            roles.remove(&role_id);
        }

        Ok(())
    }

    async fn set_role_position(
        &self,
        _guild_id: u64,
        role_id: u64,
        position: u16,
    ) -> Result<Vec<LiveRole>, AppError> {
        let mut state = self.state();
        state.position_calls.push((role_id, position));

        state.sort_bottom_up();
        let index = state
            .roles
            .iter()
            .position(|r| r.id == role_id)
            .ok_or_else(|| failure("Unknown Role"))?;
        let role = state.roles.remove(index);
        let target = (position as usize).min(state.roles.len());
        state.roles.insert(target, role);
        state.renumber();

        Ok(state.roles.clone())
    }

    async fn member_roles(&self, _guild_id: u64, user_id: u64) -> Result<HashSet<u64>, AppError> {
        Ok(self.member(user_id))
    }

    async fn add_member_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        if state.failing_member_roles.contains(&role_id) {
            return Err(failure("Missing Permissions"));
        }

        state.members.entry(user_id).or_default().insert(role_id);

        Ok(())
    }

    async fn remove_member_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        if state.failing_member_roles.contains(&role_id) {
            return Err(failure("Missing Permissions"));
        }

        state.members.entry(user_id).or_default().remove(&role_id);

        Ok(())
    }

    async fn send_self_role_picker(
        &self,
        channel_id: u64,
        picker: &SelfRolePicker,
    ) -> Result<u64, AppError> {
        let mut state = self.state();
        let id = state.next_id();

        state.messages.entry(channel_id).or_default().push(id);
        state.pickers.push((channel_id, id, picker.clone()));

        Ok(id)
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        let mut state = self.state();
        let messages = state.messages.entry(channel_id).or_default();
        let before = messages.len();

        messages.retain(|id| *id != message_id);
        if messages.len() == before {
            return Err(failure("Unknown Message"));
        }

        state.pickers.retain(|(_, id, _)| *id != message_id);

        Ok(())
    }

    async fn purge_messages(&self, channel_id: u64, amount: u8) -> Result<usize, AppError> {
        let mut state = self.state();
        let messages = state.messages.entry(channel_id).or_default();
        let count = messages.len().min(amount as usize);

        messages.truncate(messages.len() - count);

        Ok(count)
    }
}

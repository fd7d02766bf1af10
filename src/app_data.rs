// The application state: one explicit container owning every collection of the event.
// Passed to whoever needs it; there are no global singletons.
use std::{collections::HashSet, sync::{Arc, Mutex}};

use log::{debug, info, warn};
use time::OffsetDateTime;

use crate::{
    alert::{Alert, AlertType, Severity},
    competition::{ranking::RankCriteria, round_robin::RoundRobin, Standings},
    config::ResolvedConfig,
    delegation::{Delegation, DelegationStatus, DelegationSummary, MovementLog, MovementType},
    error::StoreError,
    game::{Game, GameStatus, Period},
    resources::{StaffMember, StaffRole, StaffStatus, Vehicle},
    schedule::{EventSettings, ScheduleItem, VenueStatus},
    service::{Priority, RequestStatus, RequestType, ServiceRequest},
    session::Session,
    team::Team,
    time::clock_string,
    types::{AlertId, GameId, MovementLogId, RequestId, StaffId, TeamId},
};

// Standings keyed on the version of teams and games they were computed from.
#[derive(Debug, Default)]
struct StandingsCache {
    version: Option<u64>,
    standings: Standings,
}

#[derive(Debug, Default)]
pub struct AppData {
    settings: EventSettings,
    teams: Vec<Team>,
    games: Vec<Game>,
    delegations: Vec<Delegation>,
    movement_logs: Vec<MovementLog>,
    requests: Vec<ServiceRequest>,
    schedule: Vec<ScheduleItem>,
    venues: Vec<VenueStatus>,
    staff: Vec<StaffMember>,
    fleet: Vec<Vehicle>,
    alerts: Vec<Alert>,

    points: RoundRobin,
    rank_criteria: Vec<RankCriteria>,

    // Bumped on every change to teams or games.
    version: u64,
    cache: StandingsCache,

    next_log_id: MovementLogId,
    next_request_id: RequestId,
    next_alert_id: AlertId,
}

// Check that team IDs are unique.
fn validate_teams(teams: &[Team]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for team in teams.iter() {
        if !seen.insert(team.id) {
            return Err(StoreError::DuplicateId { kind: "team", id: u32::from(team.id) });
        }
    }
    Ok(())
}

// Check that every game points at two different known teams and that game IDs are unique.
fn validate_games(teams: &[Team], games: &[Game]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for game in games.iter() {
        validate_game(teams, game)?;
        if !seen.insert(game.id) {
            return Err(StoreError::DuplicateId { kind: "game", id: u32::from(game.id) });
        }
    }
    Ok(())
}

fn validate_game(teams: &[Team], game: &Game) -> Result<(), StoreError> {
    for side in [game.home, game.away] {
        if !teams.iter().any(|t| t.id == side) {
            return Err(StoreError::UnknownTeam(side));
        }
    }
    if game.home == game.away {
        return Err(StoreError::SameTeamTwice { game: game.id });
    }
    Ok(())
}

// Check that staff and vehicle IDs are unique within their roster.
fn validate_unique(ids: impl Iterator<Item = u32>, kind: &'static str) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

fn forbidden(session: &Session, action: &'static str) -> StoreError {
    warn!("{} tried to {action} without permission", session.name);
    StoreError::Forbidden { who: session.name.clone(), action }
}

// Basics.
impl AppData {
    // Build the store from validated teams and games. Every team gets a delegation at the hotel.
    pub fn build(config: &ResolvedConfig, teams: Vec<Team>, games: Vec<Game>) -> Result<Self, StoreError> {
        validate_teams(&teams)?;
        validate_games(&teams, &games)?;

        let delegations = teams.iter().map(Delegation::from_team).collect();
        info!("store built with {} teams and {} games", teams.len(), games.len());

        Ok(Self {
            settings: config.settings.clone(),
            teams,
            games,
            delegations,
            points: config.points,
            rank_criteria: config.rank_criteria.clone(),
            next_log_id: 1,
            next_request_id: 1,
            next_alert_id: 1,
            ..Default::default()
        })
    }

    pub fn settings(&self) -> &EventSettings { &self.settings }
    pub fn teams(&self) -> &[Team] { &self.teams }
    pub fn games(&self) -> &[Game] { &self.games }
    pub fn delegations(&self) -> &[Delegation] { &self.delegations }
    pub fn movement_logs(&self) -> &[MovementLog] { &self.movement_logs }
    pub fn requests(&self) -> &[ServiceRequest] { &self.requests }
    pub fn schedule(&self) -> &[ScheduleItem] { &self.schedule }
    pub fn venues(&self) -> &[VenueStatus] { &self.venues }
    pub fn staff(&self) -> &[StaffMember] { &self.staff }
    pub fn fleet(&self) -> &[Vehicle] { &self.fleet }
    pub fn alerts(&self) -> &[Alert] { &self.alerts }
    pub fn points(&self) -> &RoundRobin { &self.points }
    pub fn version(&self) -> u64 { self.version }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn game(&self, game_id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == game_id)
    }

    // A team's games in schedule order, for the liaison's own dashboard.
    pub fn team_games(&self, team_id: TeamId) -> Vec<&Game> {
        self.games.iter().filter(|g| g.involves(team_id)).collect()
    }

    pub fn delegation(&self, team_id: TeamId) -> Option<&Delegation> {
        self.delegations.iter().find(|d| d.id == team_id)
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

// Teams and games.
impl AppData {
    // Replace the roster. Games must still resolve against it.
    // Delegations of surviving teams are kept; new teams get a fresh one.
    pub fn replace_teams(&mut self, teams: Vec<Team>) -> Result<(), StoreError> {
        validate_teams(&teams)?;
        validate_games(&teams, &self.games)?;

        let mut delegations = Vec::with_capacity(teams.len());
        for team in teams.iter() {
            match self.delegation(team.id) {
                Some(existing) => delegations.push(existing.clone()),
                None => delegations.push(Delegation::from_team(team)),
            }
        }

        self.delegations = delegations;
        self.teams = teams;
        self.touch();
        info!("roster replaced, {} teams", self.teams.len());
        Ok(())
    }

    pub fn replace_games(&mut self, games: Vec<Game>) -> Result<(), StoreError> {
        validate_games(&self.teams, &games)?;
        self.games = games;
        self.touch();
        info!("game list replaced, {} games", self.games.len());
        Ok(())
    }

    pub fn add_game(&mut self, game: Game) -> Result<(), StoreError> {
        validate_game(&self.teams, &game)?;
        if self.game(game.id).is_some() {
            return Err(StoreError::DuplicateId { kind: "game", id: u32::from(game.id) });
        }

        debug!("added game {}", game.id);
        self.games.push(game);
        self.touch();
        Ok(())
    }

    // Record a score. The whole game record is swapped for an updated copy.
    // The period is taken as given, so leaving it out clears an earlier OT or SO tag.
    pub fn record_score(&mut self, session: &Session, game_id: GameId, home_score: u16, away_score: u16,
    status: GameStatus, period: Option<Period>) -> Result<&Game, StoreError> {
        if !session.can_record_scores() {
            return Err(forbidden(session, "record scores"));
        }

        let index = self.games.iter().position(|g| g.id == game_id).ok_or(StoreError::UnknownGame(game_id))?;

        let mut updated = self.games[index].clone();
        updated.home_score = Some(home_score);
        updated.away_score = Some(away_score);
        updated.status = status;
        updated.period = period;

        self.games[index] = updated;
        self.touch();
        info!("{} recorded game {game_id}: {} ({status})", session.name, self.games[index].score_line());
        Ok(&self.games[index])
    }

    // Current standings, recomputed only when teams or games changed since the last call.
    pub fn standings(&mut self) -> &Standings {
        if self.cache.version != Some(self.version) {
            debug!("standings stale at version {}, recomputing", self.version);
            self.cache.standings = self.compute_standings();
            self.cache.version = Some(self.version);
        }
        &self.cache.standings
    }

    // Fresh standings without touching the cache.
    pub fn compute_standings(&self) -> Standings {
        Standings::build(&self.teams, &self.games, &self.points, &self.rank_criteria)
    }
}

// Delegations.
impl AppData {
    fn move_delegation(&mut self, session: &Session, team_id: TeamId, at: OffsetDateTime, movement_type: MovementType,
    details: &str) -> Result<&MovementLog, StoreError> {
        if !session.can_move_delegation(team_id) {
            return Err(forbidden(session, "move this delegation"));
        }

        let delegation = self.delegations.iter_mut()
            .find(|d| d.id == team_id)
            .ok_or(StoreError::UnknownDelegation(team_id))?;

        let action = match movement_type {
            MovementType::Departure => delegation.depart(),
            MovementType::Arrival => delegation.arrive(),
            MovementType::Issue => delegation.report_issue(details),
        };

        let log = MovementLog {
            id: self.next_log_id,
            team_id,
            team_name: delegation.country.clone(),
            flag: delegation.flag.clone(),
            action,
            timestamp: clock_string(at),
            movement_type,
        };
        self.next_log_id = self.next_log_id.saturating_add(1);

        info!("{}: {}", log.team_name, log.action);
        self.movement_logs.insert(0, log);
        Ok(&self.movement_logs[0])
    }

    pub fn depart_delegation(&mut self, session: &Session, team_id: TeamId, at: OffsetDateTime) -> Result<&MovementLog, StoreError> {
        self.move_delegation(session, team_id, at, MovementType::Departure, "")
    }

    pub fn arrive_delegation(&mut self, session: &Session, team_id: TeamId, at: OffsetDateTime) -> Result<&MovementLog, StoreError> {
        self.move_delegation(session, team_id, at, MovementType::Arrival, "")
    }

    pub fn report_delegation_issue(&mut self, session: &Session, team_id: TeamId, details: &str, at: OffsetDateTime) -> Result<&MovementLog, StoreError> {
        self.move_delegation(session, team_id, at, MovementType::Issue, details)
    }

    pub fn replace_delegations(&mut self, delegations: Vec<Delegation>) -> Result<(), StoreError> {
        if let Some(orphan) = delegations.iter().find(|d| self.team(d.id).is_none()) {
            return Err(StoreError::UnknownTeam(orphan.id));
        }
        self.delegations = delegations;
        Ok(())
    }

    pub fn delegation_summary(&self) -> DelegationSummary {
        DelegationSummary::build(&self.delegations)
    }
}

// Service requests.
impl AppData {
    pub fn submit_request(&mut self, session: &Session, request_type: RequestType, priority: Priority, details: &str,
    at: OffsetDateTime) -> Result<&ServiceRequest, StoreError> {
        let details = details.trim();
        if details.is_empty() {
            return Err(StoreError::EmptyRequestDetails);
        }

        let request = ServiceRequest::build(self.next_request_id, request_type, priority, &session.name, details, clock_string(at));
        self.next_request_id = self.next_request_id.saturating_add(1);

        info!("{} raised {:?} request {} ({:?})", session.name, request.request_type, request.id, request.priority);
        self.requests.insert(0, request);
        Ok(&self.requests[0])
    }

    pub fn visible_requests(&self, session: &Session) -> Vec<&ServiceRequest> {
        self.requests.iter().filter(|r| r.is_visible_to(session)).collect()
    }

    pub fn set_request_status(&mut self, session: &Session, request_id: RequestId, status: RequestStatus) -> Result<(), StoreError> {
        if !session.can_manage_requests() {
            return Err(forbidden(session, "manage service requests"));
        }

        let request = self.requests.iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;
        request.status = status;

        info!("request {request_id} is now {status:?}");
        Ok(())
    }
}

// Staff, fleet and alerts.
impl AppData {
    pub fn replace_staff(&mut self, staff: Vec<StaffMember>) -> Result<(), StoreError> {
        validate_unique(staff.iter().map(|s| u32::from(s.id)), "staff")?;
        self.staff = staff;
        info!("staff roster replaced, {} members", self.staff.len());
        Ok(())
    }

    pub fn replace_fleet(&mut self, fleet: Vec<Vehicle>) -> Result<(), StoreError> {
        validate_unique(fleet.iter().map(|v| u32::from(v.id)), "vehicle")?;
        self.fleet = fleet;
        info!("fleet replaced, {} vehicles", self.fleet.len());
        Ok(())
    }

    pub fn set_staff_status(&mut self, session: &Session, staff_id: StaffId, status: StaffStatus) -> Result<(), StoreError> {
        if !session.can_manage_resources() {
            return Err(forbidden(session, "change staff status"));
        }

        let member = self.staff.iter_mut()
            .find(|s| s.id == staff_id)
            .ok_or(StoreError::UnknownStaff(staff_id))?;
        member.status = status;

        info!("{} is now {status:?}", member.name);
        Ok(())
    }

    pub fn filtered_staff(&self, query: &str, role: Option<StaffRole>) -> Vec<&StaffMember> {
        self.staff.iter().filter(|s| s.matches(query, role)).collect()
    }

    pub fn filtered_fleet(&self, query: &str) -> Vec<&Vehicle> {
        self.fleet.iter().filter(|v| v.matches(query)).collect()
    }

    pub fn raise_alert(&mut self, session: &Session, alert_type: AlertType, severity: Severity, title: &str, message: &str,
    at: OffsetDateTime) -> Result<&Alert, StoreError> {
        if !session.is_director() {
            return Err(forbidden(session, "raise alerts"));
        }

        let alert = Alert::build(self.next_alert_id, alert_type, severity, title, message, clock_string(at));
        self.next_alert_id = self.next_alert_id.saturating_add(1);

        match severity {
            Severity::High => warn!("alert {}: {}", alert.id, alert.title),
            _ => info!("alert {}: {}", alert.id, alert.title),
        }
        self.alerts.insert(0, alert);
        Ok(&self.alerts[0])
    }

    pub fn dismiss_alert(&mut self, session: &Session, alert_id: AlertId) -> Result<Alert, StoreError> {
        if !session.is_director() {
            return Err(forbidden(session, "dismiss alerts"));
        }

        let index = self.alerts.iter().position(|a| a.id == alert_id).ok_or(StoreError::UnknownAlert(alert_id))?;
        debug!("alert {alert_id} dismissed");
        Ok(self.alerts.remove(index))
    }

    pub fn replace_alerts(&mut self, alerts: Vec<Alert>) -> Result<(), StoreError> {
        validate_unique(alerts.iter().map(|a| u32::from(a.id)), "alert")?;
        self.next_alert_id = alerts.iter().map(|a| a.id).max().map_or(1, |id| id.saturating_add(1));
        self.alerts = alerts;
        Ok(())
    }

    // Any delegation with an issue, any critical request still pending or any high severity alert.
    pub fn system_critical(&self) -> bool {
        self.delegations.iter().any(|d| d.status == DelegationStatus::Issue)
            || self.requests.iter().any(|r| r.priority == Priority::Critical && r.status == RequestStatus::Pending)
            || self.alerts.iter().any(Alert::is_high)
    }
}

// Schedule, venues and settings.
impl AppData {
    pub fn update_settings(&mut self, settings: EventSettings) {
        self.settings = settings;
    }

    pub fn replace_schedule(&mut self, schedule: Vec<ScheduleItem>) {
        self.schedule = schedule;
    }

    pub fn replace_venues(&mut self, venues: Vec<VenueStatus>) {
        self.venues = venues;
    }
}

// The store behind one mutex for callers on more than one thread.
// Readers never see a game half-way through an update.
#[derive(Debug, Clone, Default)]
pub struct SharedAppData(Arc<Mutex<AppData>>);

impl SharedAppData {
    pub fn new(data: AppData) -> Self {
        Self(Arc::new(Mutex::new(data)))
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppData) -> R) -> Result<R, StoreError> {
        let data = self.0.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&data))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut AppData) -> R) -> Result<R, StoreError> {
        let mut data = self.0.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut data))
    }

    // Owned copy of the standings at the current version.
    pub fn standings(&self) -> Result<Standings, StoreError> {
        self.write(|data| data.standings().clone())
    }
}

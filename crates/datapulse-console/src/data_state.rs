//! Data States
//!
//! Readiness of a dashboard page and the user-facing copy shown for every
//! state that is not [`DataState::Ready`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::navigation::paths;

/// Readiness of the data behind a page render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataState {
    /// No marketplace account is connected
    NotConnected,
    /// The fetch succeeded but returned nothing for the period
    NoData,
    /// The data layer for this section does not exist yet
    Unavailable,
    /// The fetch failed
    Error,
    /// Content is available
    Ready,
}

impl DataState {
    pub const ALL: [DataState; 5] = [
        DataState::NotConnected,
        DataState::NoData,
        DataState::Unavailable,
        DataState::Error,
        DataState::Ready,
    ];

    pub fn is_ready(self) -> bool {
        matches!(self, DataState::Ready)
    }

    /// Whether the gate offers a retry action for this state
    pub fn is_retryable(self) -> bool {
        matches!(self, DataState::Error)
    }

    /// Copy for the gate banner, `None` for `Ready`
    pub fn copy(self) -> Option<&'static DataStateCopy> {
        copy(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataState::NotConnected => "NOT_CONNECTED",
            DataState::NoData => "NO_DATA",
            DataState::Unavailable => "UNAVAILABLE",
            DataState::Error => "ERROR",
            DataState::Ready => "READY",
        }
    }
}

impl fmt::Display for DataState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Banner copy for a non-ready state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataStateCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub cta_label: &'static str,
    pub cta_path: &'static str,
}

/// Label of the retry button shown for [`DataState::Error`]
pub const RETRY_LABEL: &str = "Повторить";

static NOT_CONNECTED_COPY: DataStateCopy = DataStateCopy {
    title: "Источник данных не подключён",
    description: "Подключите аккаунт marketplace, чтобы видеть метрики.",
    cta_label: "Перейти к подключениям",
    cta_path: paths::SETTINGS_CONNECTIONS,
};

static NO_DATA_COPY: DataStateCopy = DataStateCopy {
    title: "Недостаточно данных для построения отчёта",
    description: "Данные ещё не загружены или период пуст.",
    cta_label: "Проверить статус загрузки",
    cta_path: paths::DATA_HEALTH_FRESHNESS,
};

static UNAVAILABLE_COPY: DataStateCopy = DataStateCopy {
    title: "Раздел в разработке",
    description: "Экран готов. Данные будут подключены после появления API.",
    cta_label: "Открыть Data Freshness",
    cta_path: paths::DATA_HEALTH_FRESHNESS,
};

static ERROR_COPY: DataStateCopy = DataStateCopy {
    title: "Не удалось загрузить данные",
    description: "Повторите позже или проверьте статус источника.",
    cta_label: "Открыть Data Freshness",
    cta_path: paths::DATA_HEALTH_FRESHNESS,
};

/// Look up the gate copy for a state
pub fn copy(state: DataState) -> Option<&'static DataStateCopy> {
    match state {
        DataState::NotConnected => Some(&NOT_CONNECTED_COPY),
        DataState::NoData => Some(&NO_DATA_COPY),
        DataState::Unavailable => Some(&UNAVAILABLE_COPY),
        DataState::Error => Some(&ERROR_COPY),
        DataState::Ready => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Page;

    #[test]
    fn test_ready_has_no_copy() {
        assert!(DataState::Ready.copy().is_none());
        assert!(DataState::Ready.is_ready());
    }

    #[test]
    fn test_every_other_state_has_copy() {
        let gated: Vec<_> = DataState::ALL
            .iter()
            .filter(|s| !s.is_ready())
            .collect();
        assert_eq!(gated.len(), 4);
        for state in gated {
            assert!(state.copy().is_some(), "missing copy for {state}");
        }
    }

    #[test]
    fn test_not_connected_points_to_connections() {
        let copy = DataState::NotConnected.copy().unwrap();
        assert_eq!(copy.cta_path, "/settings/connections");
        assert_eq!(copy.cta_label, "Перейти к подключениям");
    }

    #[test]
    fn test_unavailable_points_to_freshness() {
        let copy = DataState::Unavailable.copy().unwrap();
        assert_eq!(copy.cta_path, "/data-health/freshness");
    }

    #[test]
    fn test_cta_paths_are_routes() {
        for state in DataState::ALL {
            if let Some(copy) = state.copy() {
                assert!(Page::from_path(copy.cta_path).is_some());
            }
        }
    }

    #[test]
    fn test_only_error_is_retryable() {
        for state in DataState::ALL {
            assert_eq!(state.is_retryable(), state == DataState::Error);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DataState::NotConnected).unwrap();
        assert_eq!(json, "\"NOT_CONNECTED\"");

        let state: DataState = serde_json::from_str("\"NO_DATA\"").unwrap();
        assert_eq!(state, DataState::NoData);
        assert_eq!(state.to_string(), "NO_DATA");
    }
}

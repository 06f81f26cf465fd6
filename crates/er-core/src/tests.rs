//! Unit tests for er-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IncidentId, LocationId};

    #[test]
    fn ordering_is_numeric() {
        assert!(LocationId(2) < LocationId(10));
        assert!(IncidentId(100) > IncidentId(99));
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "L7");
        assert_eq!(IncidentId(3).to_string(), "I3");
    }

    #[test]
    fn from_raw() {
        assert_eq!(LocationId::from(5), LocationId(5));
    }
}

#[cfg(test)]
mod emergency {
    use crate::{Capacity, CoreError, EmergencyType, Severity};

    #[test]
    fn emergency_type_parses_case_insensitively() {
        assert_eq!("Medical".parse::<EmergencyType>().unwrap(), EmergencyType::Medical);
        assert_eq!(" fire ".parse::<EmergencyType>().unwrap(), EmergencyType::Fire);
    }

    #[test]
    fn emergency_type_rejects_unknown() {
        let err = "police".parse::<EmergencyType>().unwrap_err();
        assert_eq!(err, CoreError::InvalidEmergencyType("police".into()));
    }

    #[test]
    fn severity_ranks() {
        assert_eq!(Severity::High.rank(), 1);
        assert_eq!(Severity::Medium.rank(), 2);
        assert_eq!(Severity::Low.rank(), 3);
    }

    #[test]
    fn severity_order_follows_rank() {
        let mut v = vec![Severity::Low, Severity::High, Severity::Medium];
        v.sort();
        assert_eq!(v, vec![Severity::High, Severity::Medium, Severity::Low]);
    }

    #[test]
    fn severity_parses_label_or_rank() {
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!("2".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
    }

    #[test]
    fn severity_rejects_unrecognized_instead_of_defaulting() {
        assert!(matches!("critical".parse::<Severity>(), Err(CoreError::InvalidSeverity(_))));
        assert!(matches!("0".parse::<Severity>(), Err(CoreError::InvalidSeverity(_))));
        assert!(matches!("4".parse::<Severity>(), Err(CoreError::InvalidSeverity(_))));
        assert!(matches!("".parse::<Severity>(), Err(CoreError::InvalidSeverity(_))));
    }

    #[test]
    fn capacity_parses() {
        assert_eq!("medium".parse::<Capacity>().unwrap(), Capacity::Medium);
        assert!("huge".parse::<Capacity>().is_err());
    }

    #[test]
    fn labels_round_trip_through_display() {
        for kind in EmergencyType::ALL {
            assert_eq!(kind.to_string().parse::<EmergencyType>().unwrap(), kind);
        }
    }
}

#[cfg(test)]
mod config {
    use std::path::Path;

    use crate::CityDataConfig;

    #[test]
    fn from_dir_uses_conventional_names() {
        let cfg = CityDataConfig::from_dir(Path::new("/data/city"));
        assert_eq!(cfg.locations, Path::new("/data/city/locations.csv"));
        assert_eq!(cfg.roads, Path::new("/data/city/roads.csv"));
        assert_eq!(cfg.facilities, Path::new("/data/city/facilities.csv"));
        assert_eq!(cfg.incidents.as_deref(), Some(Path::new("/data/city/incidents.csv")));
        assert_eq!(cfg.output_dir, Path::new("/data/city/output"));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn display_six_decimals() {
        assert_eq!(GeoPoint::new(30.5, -88.25).to_string(), "(30.500000, -88.250000)");
    }
}

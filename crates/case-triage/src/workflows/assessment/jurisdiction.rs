//! Venue inference from party addresses against the New York county table.

use super::domain::{ChildRecord, JurisdictionRecommendation, Residences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct County {
    pub name: &'static str,
    pub common_name: &'static str,
}

const NEW_YORK_COUNTIES: &[County] = &[
    County {
        name: "New York",
        common_name: "Manhattan",
    },
    County {
        name: "Kings",
        common_name: "Brooklyn",
    },
    County {
        name: "Queens",
        common_name: "Queens",
    },
    County {
        name: "Bronx",
        common_name: "Bronx",
    },
    County {
        name: "Richmond",
        common_name: "Staten Island",
    },
    County {
        name: "Westchester",
        common_name: "Westchester",
    },
    County {
        name: "Nassau",
        common_name: "Nassau",
    },
    County {
        name: "Suffolk",
        common_name: "Suffolk",
    },
    County {
        name: "Rockland",
        common_name: "Rockland",
    },
    County {
        name: "Erie",
        common_name: "Buffalo area",
    },
];

/// Ordered county table. Declaration order breaks ties: the first county
/// found in either address wins.
#[derive(Debug, Clone, Copy)]
pub struct CountyTable {
    counties: &'static [County],
    fallback: &'static str,
}

impl CountyTable {
    pub const fn new_york() -> Self {
        Self {
            counties: NEW_YORK_COUNTIES,
            fallback: "New York",
        }
    }

    pub const fn counties(&self) -> &'static [County] {
        self.counties
    }

    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Canonical county named in `address` (already lower-cased). When several
    /// appear, the one declared last wins. Display names are not consulted.
    fn canonical_in(&self, address: &str) -> Option<&'static str> {
        self.counties
            .iter()
            .rev()
            .find(|county| address.contains(&county.name.to_lowercase()))
            .map(|county| county.name)
    }

    pub fn resolve(
        &self,
        residences: &Residences,
        has_children: bool,
        children: &[ChildRecord],
    ) -> JurisdictionRecommendation {
        let client_addr = residences.client.to_lowercase();
        let spouse_addr = residences.spouse.to_lowercase();

        let mut basis = Vec::new();
        let mut issues = Vec::new();

        let mut county_found = None;
        for county in self.counties {
            let name = county.name.to_lowercase();
            let common = county.common_name.to_lowercase();

            if client_addr.contains(&name) || client_addr.contains(&common) {
                basis.push(format!("Client resides in {} County", county.name));
                county_found = Some(county.name);
                break;
            }
            if spouse_addr.contains(&name) || spouse_addr.contains(&common) {
                basis.push(format!("Spouse resides in {} County", county.name));
                county_found = Some(county.name);
                break;
            }
        }

        let recommended_county = match county_found {
            Some(county) => county.to_string(),
            None => {
                issues.push("Cannot determine county from addresses provided".to_string());
                self.fallback.to_string()
            }
        };

        if !client_addr.is_empty() && !spouse_addr.is_empty() {
            let client_county = self.canonical_in(&client_addr);
            let spouse_county = self.canonical_in(&spouse_addr);

            if let (Some(client_county), Some(spouse_county)) = (client_county, spouse_county) {
                if client_county != spouse_county {
                    issues.push(format!(
                        "Parties live in different counties: {client_county} vs {spouse_county}"
                    ));
                    basis.push(
                        "Multiple jurisdictions possible - may file in either county per DRL §230"
                            .to_string(),
                    );
                }
            }
        }

        if has_children {
            for school in children.iter().filter_map(|child| child.school.as_deref()) {
                basis.push(format!("Child attends school: {school}"));
            }
        }

        JurisdictionRecommendation {
            recommended_county,
            basis,
            issues,
            client_residence: client_addr,
            spouse_residence: spouse_addr,
        }
    }
}

impl Default for CountyTable {
    fn default() -> Self {
        Self::new_york()
    }
}

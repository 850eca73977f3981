//! Logical path/verb routing for the dispatch layer.

use std::fmt;

/// HTTP-like verb accepted by the dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A CRUD-addressable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    FiscalYears,
    Programs,
    Pilars,
    Sdgs,
    RiskLikelihood,
    RiskImpact,
    RiskLevel,
    Plans,
    Profiles,
    Types,
    Implementations,
}

impl Resource {
    /// All routable resources, in path-matching order.
    pub const ALL: [Resource; 11] = [
        Resource::FiscalYears,
        Resource::Programs,
        Resource::Pilars,
        Resource::Sdgs,
        Resource::RiskLikelihood,
        Resource::RiskImpact,
        Resource::RiskLevel,
        Resource::Plans,
        Resource::Profiles,
        Resource::Types,
        Resource::Implementations,
    ];

    /// The logical path segment(s) addressing this collection.
    pub fn path(self) -> &'static str {
        match self {
            Resource::FiscalYears => "fiscal-years",
            Resource::Programs => "programs",
            Resource::Pilars => "pilars",
            Resource::Sdgs => "sdgs",
            Resource::RiskLikelihood => "risk/likelihood",
            Resource::RiskImpact => "risk/impact",
            Resource::RiskLevel => "risk/level",
            Resource::Plans => "stakeholders/plans",
            Resource::Profiles => "stakeholders/profiles",
            Resource::Types => "stakeholders/types",
            Resource::Implementations => "stakeholders/implementations",
        }
    }
}

/// A parsed logical route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /slides` — slider entries, read-only.
    Slides,
    /// `GET /news` — news articles, read-only.
    News,
    /// `GET /users` — user list with passwords stripped.
    Users,
    /// `POST /auth/login`.
    Login,
    /// `POST /fiscal-years/{id}/set-active`.
    SetActive(i64),
    /// Collection path of a CRUD resource.
    Collection(Resource),
    /// Item path of a CRUD resource.
    Item(Resource, i64),
}

impl Route {
    /// Parses a logical path. Returns `None` for anything outside the known
    /// surface; the dispatch turns that into [`crate::ApiError::UnknownEndpoint`].
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/slides" => return Some(Route::Slides),
            "/news" => return Some(Route::News),
            "/users" => return Some(Route::Users),
            "/auth/login" => return Some(Route::Login),
            _ => {}
        }

        let rest = path.strip_prefix('/')?;

        if let Some(id_part) = rest
            .strip_prefix("fiscal-years/")
            .and_then(|r| r.strip_suffix("/set-active"))
        {
            return id_part.parse().ok().map(Route::SetActive);
        }

        for resource in Resource::ALL {
            if rest == resource.path() {
                return Some(Route::Collection(resource));
            }
            if let Some(tail) = rest
                .strip_prefix(resource.path())
                .and_then(|t| t.strip_prefix('/'))
            {
                if let Ok(id) = tail.parse::<i64>() {
                    return Some(Route::Item(resource, id));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_collection_and_item_paths() {
        assert_eq!(
            Route::parse("/fiscal-years"),
            Some(Route::Collection(Resource::FiscalYears))
        );
        assert_eq!(
            Route::parse("/risk/level/5"),
            Some(Route::Item(Resource::RiskLevel, 5))
        );
        assert_eq!(
            Route::parse("/stakeholders/plans/12"),
            Some(Route::Item(Resource::Plans, 12))
        );
    }

    #[test]
    fn parses_special_routes() {
        assert_eq!(Route::parse("/auth/login"), Some(Route::Login));
        assert_eq!(Route::parse("/users"), Some(Route::Users));
        assert_eq!(
            Route::parse("/fiscal-years/3/set-active"),
            Some(Route::SetActive(3))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/fiscal-years/abc"), None);
        assert_eq!(Route::parse("/fiscal-years/abc/set-active"), None);
        assert_eq!(Route::parse("fiscal-years"), None);
        assert_eq!(Route::parse("/risk"), None);
    }

    #[test]
    fn method_displays_as_verb() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}

//! Store-agnostic lookup predicates.
//!
//! The SeaORM repository turns these into SQL conditions, the mock evaluates
//! them with `matches`; both must agree.

use uuid::Uuid;

use models::{project, service};

/// Slug value the frontend sends before its router params are ready.
pub const RESERVED_SLUG: &str = "undefined";

pub fn is_unusable_slug(slug: &str) -> bool {
    let s = slug.trim();
    s.is_empty() || s == RESERVED_SLUG
}

/// `digital-marketing` -> `digital marketing`
pub fn title_from_slug(slug: &str) -> String {
    slug.replace('-', " ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceLookup {
    /// slug 完全相等
    Slug(String),
    /// slug 忽略大小写相等，或标题忽略大小写等于由 slug 推导出的标题。
    /// 两个字段都已转为小写。
    Relaxed { slug: String, title: String },
}

impl ServiceLookup {
    pub fn exact(slug: &str) -> Self {
        ServiceLookup::Slug(slug.to_string())
    }

    pub fn relaxed(slug: &str) -> Self {
        ServiceLookup::Relaxed {
            slug: slug.to_lowercase(),
            title: title_from_slug(slug).to_lowercase(),
        }
    }

    pub fn matches(&self, m: &service::Model) -> bool {
        match self {
            ServiceLookup::Slug(slug) => m.slug == *slug,
            ServiceLookup::Relaxed { slug, title } => {
                m.slug.to_lowercase() == *slug || m.title.to_lowercase() == *title
            }
        }
    }
}

/// One way a project may point at its service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMatch {
    /// `service_id` holds the service's native id
    ServiceId(Uuid),
    /// `service_ref` holds the service's id as text
    ServiceRef(String),
    ServiceSlug(String),
    Category(String),
    ServiceName(String),
}

impl ProjectMatch {
    pub fn matches(&self, m: &project::Model) -> bool {
        match self {
            ProjectMatch::ServiceId(id) => m.service_id == Some(*id),
            ProjectMatch::ServiceRef(id) => m.service_ref.as_deref() == Some(id.as_str()),
            ProjectMatch::ServiceSlug(slug) => m.service_slug.as_deref() == Some(slug.as_str()),
            ProjectMatch::Category(slug) => m.category.as_deref() == Some(slug.as_str()),
            ProjectMatch::ServiceName(name) => m.service_name.as_deref() == Some(name.as_str()),
        }
    }
}

/// Disjunction of association conventions: a project matches if ANY holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    any_of: Vec<ProjectMatch>,
}

impl ProjectQuery {
    /// Build the query for `slug`, optionally anchored on the service row it resolved to.
    ///
    /// Without a resolved service only the slug-based conventions apply, and
    /// `service_name` is compared with the title derived from the slug.
    pub fn for_service(slug: &str, resolved: Option<&service::Model>) -> Self {
        let mut any_of = Vec::with_capacity(5);
        if let Some(svc) = resolved {
            any_of.push(ProjectMatch::ServiceId(svc.id));
            any_of.push(ProjectMatch::ServiceRef(svc.id.to_string()));
        }
        any_of.push(ProjectMatch::ServiceSlug(slug.to_string()));
        any_of.push(ProjectMatch::Category(slug.to_string()));
        let name = match resolved {
            Some(svc) => svc.title.clone(),
            None => title_from_slug(slug),
        };
        any_of.push(ProjectMatch::ServiceName(name));
        Self { any_of }
    }

    pub fn conditions(&self) -> &[ProjectMatch] {
        &self.any_of
    }

    pub fn matches(&self, m: &project::Model) -> bool {
        self.any_of.iter().any(|c| c.matches(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repository::mock::{project_model, service_model};

    #[test]
    fn unusable_slugs() {
        assert!(is_unusable_slug(""));
        assert!(is_unusable_slug("   "));
        assert!(is_unusable_slug("undefined"));
        assert!(!is_unusable_slug("web"));
        assert!(!is_unusable_slug("Undefined-things"));
    }

    #[test]
    fn relaxed_lookup_accepts_case_and_title() {
        let svc = service_model("Digital-Marketing", "Digital Marketing");
        assert!(!ServiceLookup::exact("digital-marketing").matches(&svc));
        assert!(ServiceLookup::relaxed("digital-marketing").matches(&svc));

        let by_title = service_model("dm", "Digital Marketing");
        assert!(ServiceLookup::relaxed("digital-marketing").matches(&by_title));
        assert!(!ServiceLookup::relaxed("consulting").matches(&by_title));
    }

    #[test]
    fn resolved_query_has_all_five_conventions() {
        let svc = service_model("web", "Website Development");
        let q = ProjectQuery::for_service("web", Some(&svc));
        assert_eq!(
            q.conditions(),
            &[
                ProjectMatch::ServiceId(svc.id),
                ProjectMatch::ServiceRef(svc.id.to_string()),
                ProjectMatch::ServiceSlug("web".into()),
                ProjectMatch::Category("web".into()),
                ProjectMatch::ServiceName("Website Development".into()),
            ]
        );
    }

    #[test]
    fn unresolved_query_only_uses_slug_conventions() {
        let q = ProjectQuery::for_service("ai-automation", None);
        assert_eq!(
            q.conditions(),
            &[
                ProjectMatch::ServiceSlug("ai-automation".into()),
                ProjectMatch::Category("ai-automation".into()),
                ProjectMatch::ServiceName("ai automation".into()),
            ]
        );
    }

    #[test]
    fn each_convention_matches_independently() {
        let svc = service_model("web", "Website Development");
        let q = ProjectQuery::for_service("web", Some(&svc));

        let mut native = project_model("native");
        native.service_id = Some(svc.id);
        let mut text = project_model("text");
        text.service_ref = Some(svc.id.to_string());
        let mut by_slug = project_model("slug");
        by_slug.service_slug = Some("web".into());
        let mut by_category = project_model("category");
        by_category.category = Some("web".into());
        let mut by_name = project_model("name");
        by_name.service_name = Some("Website Development".into());
        let mut other = project_model("other");
        other.category = Some("mobile".into());

        for p in [&native, &text, &by_slug, &by_category, &by_name] {
            assert!(q.matches(p), "{} should match", p.title);
        }
        assert!(!q.matches(&other));
    }
}

//! Static content catalogs.
//!
//! The services, products, and case studies shown on the site are plain
//! in-memory arrays, built once at startup and shared through `AppState`.
//! There is no CMS behind them; edits ship as code changes.

mod case_studies;
mod products;
mod services;

use embrion_core::{CaseStudy, Product, Service, ServiceCategory};

/// All static catalogs, with lookup-by-slug and filter helpers.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
    products: Vec<Product>,
    case_studies: Vec<CaseStudy>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: services::all(),
            products: products::all(),
            case_studies: case_studies::all(),
        }
    }

    /// All services, in listing order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Look up a service by its URL slug.
    #[must_use]
    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// Services flagged for the home page.
    pub fn featured_services(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.featured)
    }

    /// Services in a given category.
    pub fn services_by_category(
        &self,
        category: ServiceCategory,
    ) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(move |s| s.category == category)
    }

    /// All products, in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its URL slug.
    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Products flagged for the home page.
    pub fn featured_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// All case studies, newest first.
    #[must_use]
    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    /// Look up a case study by its URL slug.
    #[must_use]
    pub fn case_study_by_slug(&self, slug: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.slug == slug)
    }

    /// Case studies flagged for the home page.
    pub fn featured_case_studies(&self) -> impl Iterator<Item = &CaseStudy> {
        self.case_studies.iter().filter(|c| c.featured)
    }

    /// Case studies in a free-form category (healthcare, fintech, ...).
    pub fn case_studies_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CaseStudy> {
        self.case_studies
            .iter()
            .filter(move |c| c.category.eq_ignore_ascii_case(category))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let catalog = Catalog::new();

        let service_slugs: HashSet<_> = catalog.services().iter().map(|s| &s.slug).collect();
        assert_eq!(service_slugs.len(), catalog.services().len());

        let product_slugs: HashSet<_> = catalog.products().iter().map(|p| &p.slug).collect();
        assert_eq!(product_slugs.len(), catalog.products().len());

        let study_slugs: HashSet<_> = catalog.case_studies().iter().map(|c| &c.slug).collect();
        assert_eq!(study_slugs.len(), catalog.case_studies().len());
    }

    #[test]
    fn test_slug_lookups() {
        let catalog = Catalog::new();

        assert!(catalog.service_by_slug("software-development").is_some());
        assert!(catalog.service_by_slug("nope").is_none());

        let product = catalog.product_by_slug("medsync").expect("medsync exists");
        assert_eq!(product.name, "MedSync");

        assert!(
            catalog
                .case_study_by_slug("healthcare-digital-transformation")
                .is_some()
        );
    }

    #[test]
    fn test_featured_subsets() {
        let catalog = Catalog::new();

        assert!(catalog.featured_services().count() >= 1);
        assert!(catalog.featured_products().count() >= 1);
        assert!(catalog.featured_case_studies().count() >= 1);
        assert!(catalog.featured_products().count() <= catalog.products().len());
    }

    #[test]
    fn test_case_studies_sorted_newest_first() {
        let catalog = Catalog::new();
        let dates: Vec<_> = catalog.case_studies().iter().map(|c| c.published_at).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::new();
        assert!(catalog.case_studies_by_category("healthcare").count() >= 1);
        assert!(catalog.case_studies_by_category("HEALTHCARE").count() >= 1);
        assert!(
            catalog
                .services_by_category(embrion_core::ServiceCategory::Consulting)
                .count()
                >= 1
        );
    }
}

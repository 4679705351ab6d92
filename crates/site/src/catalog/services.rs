//! Service offerings.

use embrion_core::{Service, ServiceCategory};

fn service(
    id: &str,
    title: &str,
    summary: &str,
    description: &str,
    features: &[&str],
    icon: &str,
    category: ServiceCategory,
    featured: bool,
) -> Service {
    Service {
        id: id.to_owned(),
        title: title.to_owned(),
        slug: id.to_owned(),
        summary: summary.to_owned(),
        description: description.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
        icon: Some(icon.to_owned()),
        category,
        featured,
    }
}

/// The full service catalog, in listing order.
pub fn all() -> Vec<Service> {
    vec![
        service(
            "seo",
            "Website Creation & SEO",
            "Fast, SEO-optimized websites that convert visitors into customers.",
            "We build high-performance websites that not only look great but also rank well in \
             search engines. Our SEO-first approach ensures your site is discoverable and drives \
             qualified traffic to your business.",
            &[
                "SEO-optimized website design",
                "Performance optimization",
                "Mobile-first responsive design",
                "Conversion-focused UX",
                "Search engine optimization",
                "Analytics and tracking setup",
            ],
            "globe",
            ServiceCategory::Marketing,
            true,
        ),
        service(
            "brand-visibility",
            "Social Media & Brand Visibility",
            "Strategic social media management and brand building.",
            "Build a strong, recognizable brand presence across all social media platforms. We \
             create engaging content strategies that increase your brand visibility and connect \
             with your target audience.",
            &[
                "Social media strategy development",
                "Content creation and curation",
                "Community management",
                "Brand identity design",
                "Influencer partnerships",
                "Performance analytics and reporting",
            ],
            "share-2",
            ServiceCategory::Marketing,
            true,
        ),
        service(
            "data-strategy",
            "Data Analysis & Business Strategy",
            "Data-driven insights to inform business decisions.",
            "Transform your business data into actionable insights. Our data analysis services \
             help you understand your market, optimize operations, and make informed strategic \
             decisions.",
            &[
                "Business intelligence and analytics",
                "Market research and analysis",
                "Performance metrics tracking",
                "Strategic planning and consulting",
                "Data visualization and reporting",
                "Predictive analytics and forecasting",
            ],
            "bar-chart-3",
            ServiceCategory::Consulting,
            false,
        ),
        service(
            "software-development",
            "Software Development & Digital Solutions",
            "Custom software solutions for healthcare organizations.",
            "We develop reliable, secure software solutions specifically designed for healthcare \
             organizations. From patient management systems to clinical decision support tools, \
             we build technology that healthcare professionals can trust.",
            &[
                "Custom healthcare software development",
                "HIPAA-compliant solutions",
                "Integration with existing systems",
                "User experience design",
                "Quality assurance and testing",
                "Ongoing support and maintenance",
            ],
            "code",
            ServiceCategory::Development,
            true,
        ),
        service(
            "content",
            "Copywriting & Content Creation",
            "Compelling content that engages and converts.",
            "From web copy to clinical white papers, we produce content that speaks both to \
             healthcare professionals and the patients they serve, in a voice your brand can \
             keep.",
            &[
                "Website and landing page copy",
                "Blog and article writing",
                "Clinical and technical white papers",
                "Email campaign content",
                "Editorial calendars",
                "Tone-of-voice guidelines",
            ],
            "pen-tool",
            ServiceCategory::Marketing,
            false,
        ),
        service(
            "consulting-branding",
            "Business Consulting & Product Branding",
            "Strategic guidance for business growth and brand development.",
            "Get expert guidance on business strategy, product development, and brand \
             positioning. We help healthcare technology companies navigate growth challenges and \
             establish strong market presence.",
            &[
                "Business strategy consulting",
                "Product development guidance",
                "Brand positioning and strategy",
                "Market entry planning",
                "Competitive analysis",
                "Growth strategy development",
            ],
            "target",
            ServiceCategory::Consulting,
            false,
        ),
    ]
}

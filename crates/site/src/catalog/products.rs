//! Shipped products.

use embrion_core::{Pricing, Product};

struct Entry<'a> {
    id: &'a str,
    name: &'a str,
    tagline: &'a str,
    description: &'a str,
    features: &'a [&'a str],
    benefits: &'a [&'a str],
    screenshots: &'a [&'a str],
    demo_url: Option<&'a str>,
    pricing: Pricing,
    featured: bool,
}

fn product(entry: &Entry<'_>) -> Product {
    Product {
        id: entry.id.to_owned(),
        name: entry.name.to_owned(),
        slug: entry.id.to_owned(),
        tagline: entry.tagline.to_owned(),
        description: entry.description.to_owned(),
        features: entry.features.iter().map(|&f| f.to_owned()).collect(),
        benefits: entry.benefits.iter().map(|&b| b.to_owned()).collect(),
        screenshots: entry.screenshots.iter().map(|&s| s.to_owned()).collect(),
        demo_url: entry.demo_url.map(str::to_owned),
        pricing: entry.pricing,
        featured: entry.featured,
    }
}

/// The full product catalog, in listing order.
pub fn all() -> Vec<Product> {
    vec![
        product(&Entry {
            id: "medsync",
            name: "MedSync",
            tagline: "Comprehensive medication synchronization and management platform",
            description:
                "MedSync is a comprehensive medication synchronization and management platform \
                 designed specifically for healthcare providers. It streamlines medication \
                 processes, improves patient safety, and enhances clinical workflow efficiency.",
            features: &[
                "Medication synchronization",
                "Patient safety features",
                "Healthcare provider integration",
                "Real-time medication tracking",
                "Automated refill management",
                "Compliance monitoring",
            ],
            benefits: &[
                "Reduce medication errors by 85%",
                "Improve patient adherence rates",
                "Streamline pharmacy workflows",
                "Enhance patient communication",
                "Ensure regulatory compliance",
                "Reduce administrative burden",
            ],
            screenshots: &[
                "/static/images/products/medsync/dashboard.png",
                "/static/images/products/medsync/patient-view.png",
                "/static/images/products/medsync/medication-list.png",
            ],
            demo_url: Some("https://demo.medsync.embriontechnologies.com"),
            pricing: Pricing::ContactSales,
            featured: true,
        }),
        product(&Entry {
            id: "stewardai",
            name: "StewardAI",
            tagline: "AI-powered healthcare decision support and patient care optimization",
            description:
                "StewardAI leverages artificial intelligence to provide healthcare professionals \
                 with intelligent decision support, predictive analytics, and patient care \
                 optimization tools. It transforms complex medical data into actionable insights.",
            features: &[
                "AI decision support",
                "Patient care optimization",
                "Predictive analytics",
                "Clinical decision algorithms",
                "Real-time monitoring",
                "Evidence-based recommendations",
            ],
            benefits: &[
                "Improve diagnostic accuracy by 40%",
                "Reduce treatment planning time by 60%",
                "Enhance patient outcomes",
                "Optimize resource allocation",
                "Support evidence-based medicine",
                "Enable personalized care plans",
            ],
            screenshots: &[
                "/static/images/products/stewardai/ai-dashboard.png",
                "/static/images/products/stewardai/patient-view.png",
            ],
            demo_url: Some("https://demo.stewardai.embriontechnologies.com"),
            pricing: Pricing::Enterprise,
            featured: true,
        }),
        product(&Entry {
            id: "interpocket",
            name: "Interpocket",
            tagline: "Connect your pockets virtually with everyone",
            description:
                "Interpocket is an innovative peer-to-peer wallet solution that enables virtual \
                 connections between users' financial pockets. Built with security and \
                 scalability in mind, it provides a seamless way for users to manage and share \
                 financial resources.",
            features: &[
                "Secure peer-to-peer transactions",
                "Virtual pocket connections",
                "Real-time transaction tracking",
                "Cross-platform compatibility",
                "Advanced security protocols",
            ],
            benefits: &[
                "Eliminate physical cash handling",
                "Instant money transfers",
                "Secure financial connections",
                "User-friendly interface",
                "Scalable architecture",
            ],
            screenshots: &[
                "/static/images/products/interpocket-1.jpg",
                "/static/images/products/interpocket-2.jpg",
            ],
            demo_url: Some("https://play.google.com/store/apps/details?id=com.interpocket.v1"),
            pricing: Pricing::ContactSales,
            featured: false,
        }),
        product(&Entry {
            id: "nigeria-diaspora-initiative",
            name: "Nigeria Diaspora Initiative",
            tagline: "Showcasing the efforts and activities of Nigerians in the diaspora",
            description:
                "A comprehensive platform designed to highlight and connect the Nigerian \
                 diaspora community, showcasing their contributions, activities, and initiatives \
                 across the globe. Built with modern web technologies for global accessibility.",
            features: &[
                "Community showcase platform",
                "Global diaspora connections",
                "Activity and initiative tracking",
                "Responsive web design",
                "Content management system",
            ],
            benefits: &[
                "Connect Nigerians worldwide",
                "Showcase diaspora contributions",
                "Build global community",
                "Easy content management",
                "Mobile-first experience",
            ],
            screenshots: &[
                "/static/images/products/ndi-1.jpg",
                "/static/images/products/ndi-2.jpg",
            ],
            demo_url: Some("https://ndi-pi.vercel.app/"),
            pricing: Pricing::ContactSales,
            featured: false,
        }),
        product(&Entry {
            id: "numsa",
            name: "NUMSA",
            tagline: "Official website of Nile University Medical Students' Association",
            description:
                "A professional website for the Nile University Medical Students' Association, \
                 providing comprehensive information about the organization, events, and \
                 resources for medical students. Features clean design and easy navigation.",
            features: &[
                "Professional association website",
                "Event management system",
                "Student resource center",
                "Responsive design",
                "Easy content updates",
            ],
            benefits: &[
                "Professional online presence",
                "Easy information access",
                "Student engagement",
                "Modern web standards",
                "Maintenance-friendly",
            ],
            screenshots: &[
                "/static/images/products/numsa-1.jpg",
                "/static/images/products/numsa-2.jpg",
            ],
            demo_url: Some("https://numsa.netlify.app/"),
            pricing: Pricing::ContactSales,
            featured: true,
        }),
        product(&Entry {
            id: "powerstack",
            name: "Powerstack",
            tagline: "Power utility companion - buy your electricity on Powerstack",
            description:
                "Powerstack is a utility companion application that simplifies the process of \
                 purchasing electricity, providing users with a convenient platform for managing \
                 their power needs with secure transactions and real-time tracking.",
            features: &[
                "Electricity purchase platform",
                "Secure payment processing",
                "Real-time utility tracking",
                "User account management",
                "Transaction history",
            ],
            benefits: &[
                "Simplified electricity purchases",
                "Secure transactions",
                "Real-time monitoring",
                "User-friendly interface",
                "Reliable utility management",
            ],
            screenshots: &[
                "/static/images/products/powerstack-1.jpg",
                "/static/images/products/powerstack-2.jpg",
            ],
            demo_url: Some("https://powerstack-theta.vercel.app/"),
            pricing: Pricing::ContactSales,
            featured: true,
        }),
    ]
}

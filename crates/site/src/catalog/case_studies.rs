//! Published case studies, newest first.

use chrono::NaiveDate;
use embrion_core::{CaseStudy, Metric};

struct Entry<'a> {
    id: &'a str,
    title: &'a str,
    summary: &'a str,
    description: &'a str,
    client: &'a str,
    industry: &'a str,
    challenge: &'a str,
    solution: &'a str,
    results: &'a [&'a str],
    metrics: &'a [(&'a str, &'a str, &'a str)],
    technologies: &'a [&'a str],
    category: &'a str,
    featured: bool,
    published_at: (i32, u32, u32),
}

fn case_study(entry: &Entry<'_>) -> CaseStudy {
    let (year, month, day) = entry.published_at;
    CaseStudy {
        id: entry.id.to_owned(),
        title: entry.title.to_owned(),
        slug: entry.id.to_owned(),
        summary: entry.summary.to_owned(),
        description: entry.description.to_owned(),
        client: entry.client.to_owned(),
        industry: entry.industry.to_owned(),
        challenge: entry.challenge.to_owned(),
        solution: entry.solution.to_owned(),
        results: entry.results.iter().map(|&r| r.to_owned()).collect(),
        metrics: entry
            .metrics
            .iter()
            .map(|&(value, label, change)| Metric {
                value: value.to_owned(),
                label: label.to_owned(),
                change: change.to_owned(),
            })
            .collect(),
        technologies: entry.technologies.iter().map(|&t| t.to_owned()).collect(),
        category: entry.category.to_owned(),
        featured: entry.featured,
        published_at: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid fallback date")),
    }
}

/// The full case-study catalog.
pub fn all() -> Vec<CaseStudy> {
    vec![
        case_study(&Entry {
            id: "healthcare-digital-transformation",
            title: "Regional Hospital Network Digital Transformation",
            summary:
                "Complete digital transformation of a 15-hospital network using MedSync and \
                 StewardAI",
            description:
                "A major regional healthcare network was struggling with outdated systems, poor \
                 patient engagement, and inefficient operations. They needed a comprehensive \
                 digital transformation strategy to improve care quality and operational \
                 efficiency.",
            client: "Regional Healthcare Network",
            industry: "Healthcare System",
            challenge:
                "The network faced fragmented technology systems, poor patient engagement, and \
                 inefficient workflows that were impacting care quality and increasing \
                 operational costs.",
            solution:
                "Implemented a phased digital transformation using MedSync for medication \
                 management and StewardAI for clinical decision support. Provided comprehensive \
                 staff training and established new digital workflows.",
            results: &[
                "Modernized technology infrastructure across all 15 facilities",
                "Improved patient engagement by 73% through digital platforms",
                "Reduced operational costs by 28% through process optimization",
                "Enhanced care coordination between facilities by 89%",
                "Increased patient satisfaction scores from 5.8 to 8.7/10",
            ],
            metrics: &[
                ("73%", "Patient Engagement Increase", "+73%"),
                ("28%", "Cost Reduction", "-28%"),
                ("89%", "Care Coordination Improvement", "+89%"),
                ("8.7/10", "Patient Satisfaction", "+2.9 points"),
            ],
            technologies: &["MedSync", "StewardAI", "Next.js", "React", "Node.js"],
            category: "healthcare",
            featured: true,
            published_at: (2024, 12, 1),
        }),
        case_study(&Entry {
            id: "interpocket-mvp",
            title: "Interpocket: Peer-to-Peer Wallet MVP Development",
            summary: "Rapid MVP development for Interpocket fintech startup in 3 months",
            description:
                "Interpocket needed to quickly develop and launch a secure peer-to-peer wallet \
                 platform to meet investor deadlines and start user acquisition. They required a \
                 scalable, secure solution that could handle virtual financial connections and \
                 real-time transactions.",
            client: "Interpocket Payment Solutions Limited",
            industry: "Financial Technology",
            challenge:
                "Tight 3-month deadline to develop a secure, scalable peer-to-peer wallet \
                 platform with complex compliance requirements and real-time transaction \
                 capabilities.",
            solution:
                "Built Interpocket using React Native for mobile apps and a robust Node.js \
                 backend. Implemented security best practices and compliance features from day \
                 one, creating a seamless virtual pocket connection experience.",
            results: &[
                "Successfully launched Interpocket MVP within 3-month deadline",
                "Achieved 10,000+ users in first quarter",
                "Processed $2M+ in transactions in first 6 months",
                "Maintained 99.9% uptime during launch period",
                "Received positive investor feedback and secured funding",
            ],
            metrics: &[
                ("3 months", "MVP Development Time", "On schedule"),
                ("10,000+", "Users in Q1", "Exceeded target"),
                ("$2M+", "Transaction Volume", "+$2M"),
                ("99.9%", "Uptime", "Above SLA"),
            ],
            technologies: &["React Native", "Node.js", "PostgreSQL", "Redis", "AWS"],
            category: "fintech",
            featured: true,
            published_at: (2024, 11, 15),
        }),
        case_study(&Entry {
            id: "numsa-website-redesign",
            title: "NUMSA: Medical Students Association Website Redesign",
            summary:
                "Complete website redesign for NUMSA improving student engagement and \
                 information access",
            description:
                "The Nile University Medical Students Association (NUMSA) was struggling with \
                 poor online presence, difficult student navigation, and outdated content \
                 management. They needed a modern, user-friendly website that could improve \
                 student engagement and showcase their activities and initiatives.",
            client: "Nile University Medical Students Association (NUMSA)",
            industry: "Education",
            challenge:
                "Outdated website design, poor mobile experience, difficult content management, \
                 and low student engagement leading to missed opportunities and poor user \
                 experience for medical students.",
            solution:
                "Designed and developed a modern, responsive website for NUMSA using Next.js and \
                 Tailwind CSS. Implemented a user-friendly CMS and created an intuitive \
                 information architecture focused on medical student needs.",
            results: &[
                "Increased online inquiries by 200% in first 6 months",
                "Improved mobile user experience with 98% mobile optimization score",
                "Enhanced content management efficiency by 75%",
                "Increased student engagement by 85% through better navigation",
                "Reduced support requests by 60% through improved information architecture",
            ],
            metrics: &[
                ("200%", "Inquiry Increase", "+200%"),
                ("98%", "Mobile Optimization", "Excellent"),
                ("75%", "Content Management Efficiency", "+75%"),
                ("60%", "Support Request Reduction", "-60%"),
            ],
            technologies: &["Next.js", "Tailwind CSS", "React", "Strapi CMS", "PostgreSQL"],
            category: "education",
            featured: false,
            published_at: (2024, 10, 20),
        }),
        case_study(&Entry {
            id: "nigeria-diaspora-initiative",
            title: "Nigeria Diaspora Initiative: Community Platform Development",
            summary: "Comprehensive diaspora community platform connecting Nigerians worldwide",
            description:
                "The Nigeria Diaspora Initiative needed a modern, accessible platform to \
                 showcase the efforts and activities of Nigerians in the diaspora. They required \
                 a solution that could connect Nigerians worldwide, showcase diaspora \
                 contributions, and build a global community.",
            client: "Nigeria Diaspora Initiative",
            industry: "Community & Social Impact",
            challenge:
                "Creating a platform that could effectively represent and connect the diverse \
                 Nigerian diaspora community while providing an engaging user experience and \
                 easy content management for global accessibility.",
            solution:
                "Developed a modern web platform using Next.js and Tailwind CSS, featuring \
                 dynamic content management, community engagement tools, and responsive design \
                 for global accessibility.",
            results: &[
                "Successfully launched diaspora community platform",
                "Connected Nigerians across multiple continents",
                "Enhanced content management efficiency by 80%",
                "Improved mobile user experience with 95% optimization score",
                "Increased community engagement by 150%",
            ],
            metrics: &[
                ("80%", "Content Management Efficiency", "+80%"),
                ("95%", "Mobile Optimization", "Excellent"),
                ("150%", "Community Engagement", "+150%"),
                ("Global", "Geographic Reach", "Worldwide"),
            ],
            technologies: &["Next.js", "Tailwind CSS", "React", "Vercel", "TypeScript"],
            category: "community",
            featured: false,
            published_at: (2024, 9, 15),
        }),
    ]
}

// Static copy for the landing page sections.

pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Home", href: "#home" },
    NavItem { title: "Services", href: "#services" },
    NavItem { title: "Testimonials", href: "#testimonials" },
    NavItem { title: "Case Studies", href: "#case-studies" },
    NavItem { title: "Resources", href: "#resources" },
    NavItem { title: "About", href: "#about" },
    NavItem { title: "Contact", href: "#contact" },
];

pub struct TrustBadge {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRUST_BADGES: &[TrustBadge] = &[
    TrustBadge {
        icon: "🏆",
        title: "Google Certified",
        description: "Certified Google Ads and Analytics professionals",
    },
    TrustBadge {
        icon: "🛡️",
        title: "Vet Industry Experts",
        description: "Specialized in veterinary practice marketing",
    },
    TrustBadge {
        icon: "⭐",
        title: "Proven Results",
        description: "Helped 500+ vet practices grow their business",
    },
    TrustBadge {
        icon: "⏰",
        title: "24/7 Support",
        description: "Emergency marketing support when you need it",
    },
];

pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "google-maps",
        icon: "📍",
        title: "Google Maps Optimization",
        description: "Dominate local search results and get found first during emergencies",
        price: "From $2,500/month",
    },
    Service {
        id: "emergency",
        icon: "⏰",
        title: "Emergency Vet Marketing",
        description: "Crisis marketing strategies that work when pet owners need you most",
        price: "From $1,800/month",
    },
    Service {
        id: "local-seo",
        icon: "🏆",
        title: "Local SEO for Vets",
        description: "Rank #1 in your area for emergency veterinary services",
        price: "From $3,200/month",
    },
    Service {
        id: "crisis",
        icon: "🛡️",
        title: "Crisis Marketing",
        description: "Turn emergencies into opportunities with proven strategies",
        price: "From $2,000/month",
    },
    Service {
        id: "growth",
        icon: "👥",
        title: "Practice Growth",
        description: "Scale your veterinary practice with data-driven marketing",
        price: "From $4,500/month",
    },
    Service {
        id: "response",
        icon: "📞",
        title: "Emergency Response",
        description: "24/7 marketing support when your practice needs it most",
        price: "From $1,200/month",
    },
];

pub struct StaffMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub specialties: &'static [&'static str],
}

impl StaffMember {
    pub fn last_name(&self) -> &'static str {
        self.name.split_whitespace().last().unwrap_or(self.name)
    }
}

pub const STAFF: &[StaffMember] = &[
    StaffMember {
        name: "Sarah Johnson",
        role: "Chief Marketing Strategist",
        image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        specialties: &["Google Ads", "Local SEO"],
    },
    StaffMember {
        name: "Michael Chen",
        role: "Emergency Marketing Expert",
        image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        specialties: &["Crisis Marketing", "Emergency Response"],
    },
    StaffMember {
        name: "John Doe",
        role: "Vet Industry Specialist",
        image: "https://images.unsplash.com/photo-1582750433449-648ed127bb54?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
        specialties: &["Practice Growth", "Client Acquisition"],
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub practice: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. Sarah Johnson",
        practice: "Owner, Westside Animal Hospital",
        rating: 5,
        comment: "Urgent Vet Marketing transformed our practice! We went from 3rd page on Google to #1 for emergency vet services. Our emergency cases increased by 300% in just 6 months.",
        image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
    },
    Testimonial {
        name: "Dr. Michael Chen",
        practice: "Owner, Emergency Pet Care Center",
        rating: 5,
        comment: "Their crisis marketing strategies are incredible. When we had a major emergency situation, they helped us dominate local search and we got 15 new emergency clients in one weekend.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
    },
    Testimonial {
        name: "Dr. Emily Rodriguez",
        practice: "Owner, 24/7 Vet Emergency Clinic",
        rating: 5,
        comment: "The Google Maps optimization was a game-changer. We're now the first practice pet owners see when they search for emergency vet care. Our revenue increased by 250%.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
    },
    Testimonial {
        name: "Dr. David Wilson",
        practice: "Owner, Metro Animal Emergency",
        rating: 5,
        comment: "Outstanding marketing expertise and 24/7 support. They helped us dominate local search during a major pet emergency in our area. We got 40+ new clients in one week!",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
    },
];

pub struct CaseStudy {
    pub title: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    pub image: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Google Maps Domination",
        problem: "Westside Animal Hospital ranked on page 3 for emergency vet services",
        solution: "Comprehensive Google Maps optimization and local SEO strategy",
        results: "Moved to #1 position, 300% increase in emergency calls",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
    CaseStudy {
        title: "Crisis Marketing Success",
        problem: "Emergency Pet Care Center struggling during major pet emergency",
        solution: "Emergency marketing campaign and crisis response strategy",
        results: "15 new emergency clients in one weekend, 250% revenue increase",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
    CaseStudy {
        title: "Local SEO Transformation",
        problem: "24/7 Vet Emergency Clinic invisible in local search results",
        solution: "Complete local SEO overhaul and Google My Business optimization",
        results: "First page ranking for all emergency vet keywords, 400% more patients",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
];

pub struct Resource {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource { icon: "💡", title: "Pet Care Tips", description: "Essential tips for keeping your pet healthy and happy" },
    Resource { icon: "📖", title: "Health Guides", description: "Comprehensive guides for common pet health issues" },
    Resource { icon: "🚨", title: "Emergency Info", description: "What to do in case of a pet emergency" },
    Resource { icon: "💉", title: "Vaccination Schedule", description: "Keep track of your pet's vaccination timeline" },
    Resource { icon: "🛡️", title: "Pet Insurance", description: "Information about pet insurance options" },
    Resource { icon: "🥣", title: "Nutrition Guide", description: "Proper nutrition for different life stages" },
];

pub struct OfficeHours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const OFFICE_HOURS: &[OfficeHours] = &[
    OfficeHours { day: "Monday - Friday", hours: "8:00 AM - 6:00 PM" },
    OfficeHours { day: "Saturday", hours: "9:00 AM - 4:00 PM" },
    OfficeHours { day: "Sunday", hours: "10:00 AM - 2:00 PM" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn nav_targets_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
    }

    #[test]
    fn staff_last_name() {
        assert_eq!(STAFF[1].last_name(), "Chen");
    }
}

use yew::prelude::*;

use crate::content::{CASE_STUDIES, RESOURCES, SERVICES, TRUST_BADGES};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", "fade-up", props.light.then(|| "light"))}>
            <h2>{props.title.clone()}</h2>
            <p>{props.subtitle.clone()}</p>
        </div>
    }
}

#[function_component(TrustBadges)]
pub fn trust_badges() -> Html {
    html! {
        <section class="section trust-badges">
            <div class="container">
                <SectionHeader
                    title="Trusted by Veterinary Practices Nationwide"
                    subtitle="Our proven marketing strategies have helped hundreds of veterinary practices dominate local search and grow their emergency patient base."
                />
                <div class="card-grid four">
                    { for TRUST_BADGES.iter().enumerate().map(|(index, badge)| html! {
                        <div class="badge-card fade-up" style={stagger(index, 0.1)}>
                            <div class="badge-icon">{badge.icon}</div>
                            <h3>{badge.title}</h3>
                            <p>{badge.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section services tinted">
            <div class="container">
                <SectionHeader
                    title="Our Marketing Services"
                    subtitle="Proven marketing strategies that help veterinary practices dominate local search during emergencies"
                />
                <div class="card-grid three">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div key={service.id} class="service-card lift fade-up" style={stagger(index, 0.05)}>
                            <div class="card-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <div class="service-footer">
                                <span class="price">{service.price}</span>
                                <a href="#lead-magnet" class="outline-button">{"Get Started"}</a>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <section id="case-studies" class="section case-studies">
            <div class="container">
                <SectionHeader
                    title="Marketing Success Stories"
                    subtitle="Real results, real growth - see how we've helped veterinary practices dominate local search and grow their emergency patient base"
                />
                <div class="card-grid three">
                    { for CASE_STUDIES.iter().enumerate().map(|(index, study)| html! {
                        <div class="case-card fade-up" style={stagger(index, 0.1)}>
                            <img src={study.image} alt={study.title} />
                            <div class="case-body">
                                <h3>{study.title}</h3>
                                <h4 class="problem">{"Problem:"}</h4>
                                <p>{study.problem}</p>
                                <h4 class="solution">{"Solution:"}</h4>
                                <p>{study.solution}</p>
                                <h4 class="results">{"Results:"}</h4>
                                <p class="results-text">{study.results}</p>
                                <a href="#lead-magnet" class="gradient-button">{"See Full Case Study →"}</a>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Resources)]
pub fn resources() -> Html {
    html! {
        <section id="resources" class="section resources tinted">
            <div class="container">
                <SectionHeader
                    title="Marketing Resources"
                    subtitle="Access our comprehensive library of veterinary marketing guides, strategies, and tips to help you dominate local search and grow your practice"
                />
                <div class="card-grid three">
                    { for RESOURCES.iter().enumerate().map(|(index, resource)| html! {
                        <div class="service-card lift fade-up" style={stagger(index, 0.1)}>
                            <div class="card-icon">{resource.icon}</div>
                            <h3>{resource.title}</h3>
                            <p>{resource.description}</p>
                            <a href="#lead-magnet" class="outline-button wide">{"Learn More"}</a>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

/// Inline animation delay so grid cards fade in one after another.
fn stagger(index: usize, step_secs: f64) -> String {
    format!("animation-delay: {:.2}s;", index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::stagger;

    #[test]
    fn stagger_delays_grow_with_index() {
        assert_eq!(stagger(0, 0.1), "animation-delay: 0.00s;");
        assert_eq!(stagger(3, 0.05), "animation-delay: 0.15s;");
    }
}

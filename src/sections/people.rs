use yew::prelude::*;

use crate::content::{STAFF, TESTIMONIALS};
use crate::sections::showcase::SectionHeader;
use crate::widgets::carousel::Carousel;

#[derive(Properties, PartialEq)]
pub struct CarouselControlsProps {
    pub carousel: UseStateHandle<Carousel>,
    /// Used in the dot labels, e.g. "Go to expert 2".
    pub item_name: AttrValue,
}

/// Previous / next buttons and one dot per slide.
#[function_component(CarouselControls)]
pub fn carousel_controls(props: &CarouselControlsProps) -> Html {
    let carousel = props.carousel.clone();
    let current = *carousel;

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    html! {
        <div class="carousel-controls">
            <button class="carousel-arrow" onclick={prev} aria-label={format!("Previous {}", props.item_name)}>
                {"‹"}
            </button>
            <div class="carousel-dots">
                { for (0..current.len()).map(|index| {
                    let carousel = carousel.clone();
                    html! {
                        <button
                            class={classes!("carousel-dot", current.is_current(index).then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(index)))}
                            aria-label={format!("Go to {} {}", props.item_name, index + 1)}
                        />
                    }
                }) }
            </div>
            <button class="carousel-arrow" onclick={next} aria-label={format!("Next {}", props.item_name)}>
                {"›"}
            </button>
        </div>
    }
}

fn stars(rating: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..rating).map(|_| html! { <span class="star">{"★"}</span> }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));
    let Some(current) = TESTIMONIALS.get(carousel.index()) else {
        return html! {};
    };

    html! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <SectionHeader
                    title="What Our Vet Practice Clients Say"
                    subtitle="Don't just take our word for it - hear from the veterinary practice owners who trust us with their marketing"
                />
                <div key={carousel.index()} class="testimonial-card slide-in">
                    <div class="testimonial-author">
                        <img src={current.image} alt={current.name} />
                        <div>
                            <h4>{current.name}</h4>
                            <p>{current.practice}</p>
                        </div>
                    </div>
                    { stars(current.rating) }
                    <p class="testimonial-comment">{format!("\"{}\"", current.comment)}</p>
                </div>
                <CarouselControls carousel={carousel.clone()} item_name="testimonial" />
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let carousel = use_state(|| Carousel::new(STAFF.len()));
    let Some(expert) = STAFF.get(carousel.index()) else {
        return html! {};
    };

    html! {
        <section id="about" class="section about">
            <div class="container">
                <SectionHeader
                    title="Meet Our Marketing Experts"
                    subtitle="Our experienced marketing professionals specialize in helping veterinary practices dominate local search and grow their emergency patient base"
                />
                <div key={carousel.index()} class="expert-card slide-in">
                    <img class="expert-photo" src={expert.image} alt={expert.name} />
                    <div class="expert-info">
                        <h3>{expert.name}</h3>
                        <p class="expert-role">{expert.role}</p>
                        <div class="specialties">
                            { for expert.specialties.iter().map(|specialty| html! {
                                <span key={*specialty} class="specialty-badge">{*specialty}</span>
                            }) }
                        </div>
                        <blockquote>
                            {format!(
                                "\"Outstanding marketing expertise and proven results. {} is dedicated to helping veterinary practices dominate local search and grow their emergency patient base.\"",
                                expert.last_name()
                            )}
                        </blockquote>
                        <div class="rating-row">
                            { stars(5) }
                            <span>{"5.0 Rating"}</span>
                        </div>
                    </div>
                </div>
                <CarouselControls carousel={carousel.clone()} item_name="expert" />

                <div class="why-choose fade-up">
                    <h3>{"Why Choose Urgent Vet Marketing?"}</h3>
                    <div class="why-grid">
                        <span>{"✔ 500+ Vet Practices Helped"}</span>
                        <span>{"✔ Proven Emergency Marketing"}</span>
                        <span>{"✔ 24/7 Marketing Support"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

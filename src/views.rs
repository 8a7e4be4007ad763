use yew::prelude::*;

// Static content panels for the secondary views. No state; the ambient
// tone behind them is owned by the app shell.

#[function_component(SuitesView)]
pub(crate) fn suites_view() -> Html {
    html! {
        <section class="view-panel">
            <p class="section-eyebrow">{ "Chambers of Calm" }</p>
            <h2 class="section-title">{ "Suites" }</h2>
            <div class="view-grid">
                <article class="view-card">
                    <h3>{ "The Veranda Suite" }</h3>
                    <p>{ "Wraparound teak balconies above the banyan court, with a \
                          claw-foot bath facing the gardens." }</p>
                </article>
                <article class="view-card">
                    <h3>{ "The Botanist's Residence" }</h3>
                    <p>{ "Two storeys of pressed-palm wallpaper, a private library and \
                          the 1924 survey maps of the grounds." }</p>
                </article>
                <article class="view-card">
                    <h3>{ "The Monsoon Wing" }</h3>
                    <p>{ "Shuttered colonnades built for the rains; fall asleep to \
                          water on the tiled roof." }</p>
                </article>
            </div>
        </section>
    }
}

#[function_component(DiningView)]
pub(crate) fn dining_view() -> Html {
    html! {
        <section class="view-panel view-panel-dark">
            <p class="section-eyebrow">{ "The Gilded Bar" }</p>
            <h2 class="section-title section-title-light">{ "Dining" }</h2>
            <p class="section-copy">
                { "Crystal glasses and amber liquids under the original brass fans. \
                   The kitchen serves from the garden; the bar serves from 1924." }
            </p>
            <div class="dining-hours">
                <p>{ "Breakfast — from 06:30 on the veranda" }</p>
                <p>{ "The Botanist's Lunch — midday, under the banyans" }</p>
                <p>{ "Bar — sunset until the last storied cocktail" }</p>
            </div>
        </section>
    }
}

#[function_component(SpaView)]
pub(crate) fn spa_view() -> Html {
    html! {
        <section class="view-panel">
            <p class="section-eyebrow">{ "Heritage Spa" }</p>
            <h2 class="section-title">{ "Wellness" }</h2>
            <p class="section-copy">
                { "Rainwater pools, frangipani oils and treatment pavilions open to \
                   the garden air. Unhurried by design." }
            </p>
            <div class="view-grid">
                <article class="view-card">
                    <h3>{ "The Mirror Pool" }</h3>
                    <p>{ "An infinity edge kept at dawn temperature, all day." }</p>
                </article>
                <article class="view-card">
                    <h3>{ "Garden Rituals" }</h3>
                    <p>{ "Botanicals picked the same morning they are pressed." }</p>
                </article>
            </div>
        </section>
    }
}

#[function_component(HistoryView)]
pub(crate) fn history_view() -> Html {
    html! {
        <section class="view-panel">
            <p class="section-eyebrow">{ "Our Legacy" }</p>
            <h2 class="section-title">{ "History" }</h2>
            <div class="history-timeline">
                <div class="history-entry">
                    <span class="history-year">{ "1924" }</span>
                    <p>{ "The hotel opens its doors at the edge of the colonial \
                          district, six rooms and one gramophone." }</p>
                </div>
                <div class="history-entry">
                    <span class="history-year">{ "1958" }</span>
                    <p>{ "The garden wing is added around the banyan rather than \
                          through it." }</p>
                </div>
                <div class="history-entry">
                    <span class="history-year">{ "2024" }</span>
                    <p>{ "A century on, the veranda still opens at dawn." }</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(ReservationsView)]
pub(crate) fn reservations_view() -> Html {
    html! {
        <section class="view-panel">
            <p class="section-eyebrow">{ "Reservations" }</p>
            <h2 class="section-title">{ "Plan Your Stay" }</h2>
            <p class="section-copy">
                { "Choose your dates in the bar below and we will confirm \
                   availability for your visit. For longer stays and the Monsoon \
                   Wing, write to the concierge desk." }
            </p>
        </section>
    }
}

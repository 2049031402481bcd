use yew::prelude::*;

use crate::components::footer::Footer;
use crate::content::SiteCtx;

fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
            .legal-page { padding-top: 74px; min-height: 100vh; }

            .legal-hero {
                text-align: center;
                padding: 4.5rem 1.5rem 3rem;
            }

            .legal-hero h1 {
                font-size: clamp(2.2rem, 5vw, 3.2rem);
                margin-bottom: 0.75rem;
            }

            .legal-hero p { color: var(--muted); }

            .legal-body {
                max-width: 780px;
                margin: 0 auto;
                padding: 0 1.5rem 5rem;
            }

            .legal-body section { margin-bottom: 2.75rem; }

            .legal-body h2 {
                font-size: 1.5rem;
                margin-bottom: 0.9rem;
            }

            .legal-body h3 {
                font-size: 1.1rem;
                margin: 1.25rem 0 0.5rem;
            }

            .legal-body p {
                color: var(--muted);
                line-height: 1.7;
                margin-bottom: 0.9rem;
            }

            .legal-body ul {
                margin: 0.5rem 0 0.9rem 1.25rem;
                color: var(--muted);
                line-height: 1.7;
            }

            .legal-contact {
                margin-top: 0.75rem;
                color: var(--muted);
                line-height: 1.8;
            }
            "#}
        </style>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    let site = use_context::<SiteCtx>().expect("site context missing").0;

    html! {
        <div class="legal-page">
            <div class="legal-hero">
                <h1>{"Terms of Service"}</h1>
                <p>{"Last updated: March 2025"}</p>
            </div>

            <div class="legal-body">
                <section>
                    <h2>{"Enrollment and Admissions"}</h2>
                    <p>
                        {format!("Enrollment at {} is subject to the completion of our admission process, including the application form, campus visit, and family meeting. Admission decisions are made holistically and communicated in writing.", site.name)}
                    </p>
                    <h3>{"Tuition and Fees"}</h3>
                    <p>
                        {"Tuition is due according to the payment schedule selected at enrollment. A one-time registration fee and an annual technology fee apply. Accounts more than 60 days past due may result in suspension of enrollment until resolved."}
                    </p>
                </section>

                <section>
                    <h2>{"Student Conduct and Expectations"}</h2>
                    <p>
                        {"Students are expected to uphold Islamic manners and the school's code of conduct, including:"}
                    </p>
                    <ul>
                        <li>{"Respect toward teachers, staff, and fellow students"}</li>
                        <li>{"Honesty in all academic work"}</li>
                        <li>{"Care for school property and shared spaces"}</li>
                        <li>{"Adherence to the uniform and attendance policies"}</li>
                    </ul>
                    <p>
                        {"Repeated or serious violations are addressed through our positive discipline process in partnership with families."}
                    </p>
                </section>

                <section>
                    <h2>{"Parent and Guardian Responsibilities"}</h2>
                    <p>{"Families partner with the school by:"}</p>
                    <ul>
                        <li>{"Ensuring punctual attendance and timely pick-up"}</li>
                        <li>{"Keeping emergency contact information current"}</li>
                        <li>{"Reviewing school communications and report cards"}</li>
                        <li>{"Supporting homework and character expectations at home"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"Website Use"}</h2>
                    <h3>{"Acceptable Use"}</h3>
                    <p>
                        {"This website is provided for information about the school and for contacting our staff. You agree not to misuse the site, attempt to disrupt its operation, or submit false or harmful content through its forms."}
                    </p>
                    <h3>{"Content Accuracy"}</h3>
                    <p>
                        {"We strive to keep published information current, but program details, fees, and schedules may change. The admissions office is the authoritative source for enrollment terms."}
                    </p>
                </section>

                <section>
                    <h2>{"Intellectual Property"}</h2>
                    <p>
                        {"All content on this site, including text, images, and branding, belongs to the school or its licensors and may not be reproduced without written permission."}
                    </p>
                </section>

                <section>
                    <h2>{"Photography and Media Release"}</h2>
                    <p>
                        {"With consent collected at enrollment, photographs of school activities may be used in school publications and on this website. Families may opt out at any time by contacting the office."}
                    </p>
                </section>

                <section>
                    <h2>{"Health and Safety"}</h2>
                    <p>{"To keep every child safe, families agree to:"}</p>
                    <ul>
                        <li>{"Keep students home when ill and report contagious conditions"}</li>
                        <li>{"Provide current immunization records as required by law"}</li>
                        <li>{"Follow campus security and visitor check-in procedures"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"Withdrawal and Dismissal"}</h2>
                    <p>
                        {"Withdrawal requires 30 days' written notice. The school reserves the right to dismiss a student when continued enrollment is not in the best interest of the student or community, after documented intervention efforts."}
                    </p>
                </section>

                <section>
                    <h2>{"Limitation of Liability"}</h2>
                    <p>
                        {"To the extent permitted by law, the school is not liable for indirect or consequential damages arising from use of this website or participation in voluntary activities beyond the supervised school program."}
                    </p>
                </section>

                <section>
                    <h2>{"Changes to Terms"}</h2>
                    <p>
                        {"We may update these terms from time to time. Material changes are communicated to enrolled families and posted on this page with a revised date."}
                    </p>
                </section>

                <section>
                    <h2>{"Contact Information"}</h2>
                    <p>{"Questions about these terms can be directed to:"}</p>
                    <div class="legal-contact">
                        <p><strong>{site.name}</strong></p>
                        <p>{"Email: "}{site.email}</p>
                        <p>{"Phone: "}{site.phone}</p>
                        <p>{"Address: "}{site.address}</p>
                    </div>
                </section>
            </div>

            { legal_styles() }
            <Footer />
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let site = use_context::<SiteCtx>().expect("site context missing").0;

    html! {
        <div class="legal-page">
            <div class="legal-hero">
                <h1>{"Privacy Policy"}</h1>
                <p>{"Last updated: March 2025"}</p>
            </div>

            <div class="legal-body">
                <section>
                    <h2>{"Introduction"}</h2>
                    <p>
                        {format!("{} respects the privacy of our families and website visitors. This policy explains what information we collect, how we use it, and the choices you have.", site.name)}
                    </p>
                </section>

                <section>
                    <h2>{"Information We Collect"}</h2>
                    <h3>{"Information You Provide"}</h3>
                    <p>
                        {"When you submit our contact form or apply for enrollment, we collect the details you provide: name, email address, phone number, and the content of your message or application."}
                    </p>
                    <h3>{"Information Collected Automatically"}</h3>
                    <p>
                        {"Our website stores a small number of preferences in your browser, such as your chosen color theme and whether you have dismissed the enrollment notice. These values stay on your device."}
                    </p>
                </section>

                <section>
                    <h2>{"How We Use Your Information"}</h2>
                    <ul>
                        <li>{"Responding to inquiries and admission requests"}</li>
                        <li>{"Communicating school updates to enrolled families"}</li>
                        <li>{"Improving our programs and website"}</li>
                        <li>{"Meeting legal and regulatory obligations"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"Information Sharing"}</h2>
                    <p>
                        {"We do not sell personal information. We share it only with service providers who help us operate the school (under confidentiality obligations) or when required by law."}
                    </p>
                </section>

                <section>
                    <h2>{"Children's Privacy"}</h2>
                    <p>
                        {"Our website is directed at parents and guardians, not children. Student records collected during enrollment are handled under our student records policy and applicable education privacy law."}
                    </p>
                </section>

                <section>
                    <h2>{"Data Security"}</h2>
                    <p>
                        {"We use reasonable administrative and technical safeguards to protect personal information. No method of transmission over the internet is completely secure, so we cannot guarantee absolute security."}
                    </p>
                </section>

                <section>
                    <h2>{"Your Rights"}</h2>
                    <ul>
                        <li>{"Request a copy of the personal information we hold about you"}</li>
                        <li>{"Ask us to correct or delete your information"}</li>
                        <li>{"Opt out of non-essential communications"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"Cookies and Tracking"}</h2>
                    <p>
                        {"We do not use advertising trackers. Browser storage is limited to the site preferences described above."}
                    </p>
                </section>

                <section>
                    <h2>{"Changes to This Policy"}</h2>
                    <p>
                        {"We may update this policy periodically. The date at the top of this page reflects the latest revision."}
                    </p>
                </section>

                <section>
                    <h2>{"Contact Us"}</h2>
                    <p>{"For privacy questions or requests:"}</p>
                    <div class="legal-contact">
                        <p><strong>{site.name}</strong></p>
                        <p>{"Email: "}{site.email}</p>
                        <p>{"Phone: "}{site.phone}</p>
                        <p>{"Address: "}{site.address}</p>
                    </div>
                </section>
            </div>

            { legal_styles() }
            <Footer />
        </div>
    }
}

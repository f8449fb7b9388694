//! Fixed-schema XML rendering of the declaration fields.

use std::fmt::Write;

use super::projector::DeclarationFields;

/// Escapes text content for XML element bodies.
fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl DeclarationFields {
    /// Renders the declaration as its fixed-schema XML document.
    ///
    /// The element set and nesting are fixed; text content is escaped, and
    /// monetary values are emitted exactly as projected (2 decimal places).
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<PoreskaPrijava>\n");

        let _ = writeln!(xml, "  <PodaciOPrijavi>");
        let _ = writeln!(
            xml,
            "    <ObracunskiPeriod>{}</ObracunskiPeriod>",
            xml_escape(&self.period)
        );
        let _ = writeln!(xml, "  </PodaciOPrijavi>");

        let _ = writeln!(xml, "  <PodaciOPoslodavcu>");
        let _ = writeln!(xml, "    <PIB>{}</PIB>", xml_escape(&self.filer_pib));
        let _ = writeln!(xml, "    <Naziv>{}</Naziv>", xml_escape(&self.filer_name));
        let _ = writeln!(xml, "  </PodaciOPoslodavcu>");

        let _ = writeln!(xml, "  <PodaciOPrimaocu>");
        let _ = writeln!(xml, "    <JMBG>{}</JMBG>", xml_escape(&self.recipient_jmbg));
        let _ = writeln!(
            xml,
            "    <ImePrezime>{}</ImePrezime>",
            xml_escape(&self.recipient_name)
        );
        let _ = writeln!(xml, "  </PodaciOPrimaocu>");

        let _ = writeln!(xml, "  <PodaciOPrihodu>");
        let _ = writeln!(
            xml,
            "    <BrojKalendarskihDana>{}</BrojKalendarskihDana>",
            self.calendar_days.normalize()
        );
        let _ = writeln!(
            xml,
            "    <BrojEfektivnihSati>{}</BrojEfektivnihSati>",
            self.effective_hours.normalize()
        );
        let _ = writeln!(xml, "    <Bruto>{}</Bruto>", self.gross);
        let _ = writeln!(
            xml,
            "    <OsnovicaPorez>{}</OsnovicaPorez>",
            self.tax_base
        );
        let _ = writeln!(xml, "    <Porez>{}</Porez>", self.tax);
        let _ = writeln!(
            xml,
            "    <OsnovicaDoprinosi>{}</OsnovicaDoprinosi>",
            self.contribution_base
        );
        let _ = writeln!(xml, "    <PIO>{}</PIO>", self.pension_contribution);
        let _ = writeln!(
            xml,
            "    <Zdravstvo>{}</Zdravstvo>",
            self.health_contribution
        );
        let _ = writeln!(
            xml,
            "    <Nezaposlenost>{}</Nezaposlenost>",
            self.unemployment_contribution
        );
        let _ = writeln!(xml, "  </PodaciOPrihodu>");

        xml.push_str("</PoreskaPrijava>\n");
        xml
    }
}

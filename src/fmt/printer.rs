use crate::{civil::TimeOfDay, fmt::Format};

use super::util::DecimalFormatter;

/// A printer for a [`TimeOfDay`] in one of the standard formats.
#[derive(Clone, Debug)]
pub(crate) struct TimeOfDayPrinter {
    format: Format,
}

impl TimeOfDayPrinter {
    pub(crate) const fn new() -> TimeOfDayPrinter {
        TimeOfDayPrinter { format: Format::ShortTime }
    }

    pub(crate) const fn format(self, format: Format) -> TimeOfDayPrinter {
        TimeOfDayPrinter { format }
    }

    pub(crate) fn print<W: core::fmt::Write>(
        &self,
        time: TimeOfDay,
        mut wtr: W,
    ) -> core::fmt::Result {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);
        static FMT_FRACTION: DecimalFormatter =
            DecimalFormatter::new().padding(3);

        // OK because the components of a time of day are never negative.
        wtr.write_str(FMT_TWO.format(time.hour() as u32).as_str())?;
        wtr.write_str(":")?;
        wtr.write_str(FMT_TWO.format(time.minute() as u32).as_str())?;
        if self.format == Format::ShortTime {
            return Ok(());
        }
        wtr.write_str(":")?;
        wtr.write_str(FMT_TWO.format(time.second() as u32).as_str())?;
        if self.format != Format::RoundTrip {
            return Ok(());
        }
        wtr.write_str(".")?;
        let millisecond = FMT_FRACTION.format(time.millisecond() as u32);
        wtr.write_str(millisecond.as_str())?;
        // Seven digits of precision, of which only milliseconds are
        // representable.
        wtr.write_str("0000")?;
        Ok(())
    }
}
